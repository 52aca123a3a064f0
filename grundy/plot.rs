//! Plot of a few periods of a sequence: index against value, with vertical markers at the start
//! of every period.

use crate::{
    drawing::{BoundingBox, Canvas, Color, Draw},
    numeric::v2f::V2f,
};
use itertools::Itertools;

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 600.0;
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 60.0;
const HORIZONTAL_GRID_LINES: u32 = 5;

/// Plot of positions `0..=pre_period + num_periods * period` (clamped to the sequence length)
#[derive(Debug, Clone)]
pub struct SegmentPlot<'a, T> {
    values: &'a [T],
    pre_period: usize,
    period: usize,
    num_periods: usize,
    title: String,
}

impl<'a, T> SegmentPlot<'a, T>
where
    T: Copy + Into<i64>,
{
    /// Create new plot. Period of zero is treated as one.
    pub fn new(
        values: &'a [T],
        pre_period: usize,
        period: usize,
        num_periods: usize,
        title: impl Into<String>,
    ) -> Self {
        SegmentPlot {
            values,
            pre_period,
            period: period.max(1),
            num_periods,
            title: title.into(),
        }
    }

    /// Number of plotted positions, counted from `0`
    pub fn plotted_len(&self) -> usize {
        self.values.len().min(
            self.pre_period.saturating_add(
                self.num_periods
                    .saturating_mul(self.period)
                    .saturating_add(1),
            ),
        )
    }

    /// Positions of the period markers that fall into the plotted range. The first one is the
    /// pre-period.
    pub fn markers(&self) -> Vec<usize> {
        let plotted_len = self.plotted_len();
        (0..=self.num_periods)
            .map(|i| self.pre_period.saturating_add(i.saturating_mul(self.period)))
            .take_while(|&position| position < plotted_len)
            .collect()
    }

    fn value_range(&self) -> (i64, i64) {
        let plotted = &self.values[..self.plotted_len()];
        let (min, max) = plotted
            .iter()
            .map(|&v| Into::<i64>::into(v))
            .minmax()
            .into_option()
            .unwrap_or((0, 0));
        let min = min.min(0);
        // Keep flat sequences away from the frame
        (min, max.max(min + 1))
    }

    fn to_canvas(&self, (min, max): (i64, i64), position: usize, value: i64) -> V2f {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let x_step = plot_width / (self.plotted_len().saturating_sub(1).max(1)) as f32;

        V2f {
            x: (position as f32).mul_add(x_step, MARGIN_LEFT),
            y: HEIGHT
                - MARGIN_BOTTOM
                - plot_height * ((value as f64 - min as f64) / (max as f64 - min as f64)) as f32,
        }
    }
}

impl<T> Draw for SegmentPlot<'_, T>
where
    T: Copy + Into<i64>,
{
    fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas,
    {
        let plotted_len = self.plotted_len();
        let range = self.value_range();
        let (min, max) = range;
        let bottom = HEIGHT - MARGIN_BOTTOM;
        let right = WIDTH - MARGIN_RIGHT;

        canvas.rect(V2f::ZERO, V2f { x: WIDTH, y: HEIGHT }, Color::WHITE);

        for line in 0..=HORIZONTAL_GRID_LINES {
            let y = (bottom - MARGIN_TOP).mul_add(
                -(line as f32 / HORIZONTAL_GRID_LINES as f32),
                bottom,
            );
            canvas.line(
                V2f { x: MARGIN_LEFT, y },
                V2f { x: right, y },
                C::thin_line_weight(),
                Color::LIGHT_GRAY,
            );
        }

        canvas.line(
            V2f {
                x: MARGIN_LEFT,
                y: MARGIN_TOP,
            },
            V2f {
                x: MARGIN_LEFT,
                y: bottom,
            },
            C::thick_line_weight(),
            Color::BLACK,
        );
        canvas.line(
            V2f {
                x: MARGIN_LEFT,
                y: bottom,
            },
            V2f { x: right, y: bottom },
            C::thick_line_weight(),
            Color::BLACK,
        );

        for (idx, position) in self.markers().into_iter().enumerate() {
            let x = self.to_canvas(range, position, min).x;
            let color = if idx == 0 { Color::RED } else { Color::ORANGE };
            canvas.dashed_line(
                V2f { x, y: MARGIN_TOP },
                V2f { x, y: bottom },
                C::thick_line_weight(),
                color,
            );
        }

        let points = self.values[..plotted_len]
            .iter()
            .enumerate()
            .map(|(position, &value)| self.to_canvas(range, position, value.into()))
            .collect::<Vec<_>>();

        for (start, end) in points.iter().tuple_windows() {
            canvas.line(*start, *end, C::thin_line_weight(), Color::BLUE);
        }
        for point in &points {
            canvas.circle(*point, C::marker_radius(), Color::BLUE);
        }

        canvas.text(
            V2f {
                x: WIDTH / 2.0,
                y: MARGIN_TOP / 2.0,
            },
            &self.title,
            Color::BLACK,
        );
        canvas.text(
            V2f {
                x: WIDTH / 2.0,
                y: HEIGHT - MARGIN_BOTTOM / 3.0,
            },
            "Game State (n)",
            Color::BLACK,
        );
        canvas.text(
            V2f {
                x: MARGIN_LEFT / 2.0,
                y: MARGIN_TOP - 10.0,
            },
            "Grundy Value",
            Color::BLACK,
        );
        canvas.text(
            V2f {
                x: MARGIN_LEFT - 15.0,
                y: MARGIN_TOP + 5.0,
            },
            &max.to_string(),
            Color::BLACK,
        );
        canvas.text(
            V2f {
                x: MARGIN_LEFT - 15.0,
                y: bottom + 5.0,
            },
            &min.to_string(),
            Color::BLACK,
        );
    }

    fn required_canvas<C>(&self) -> BoundingBox
    where
        C: Canvas,
    {
        BoundingBox {
            top_left: V2f::ZERO,
            bottom_right: V2f {
                x: WIDTH,
                y: HEIGHT,
            },
        }
    }
}
