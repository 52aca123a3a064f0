use anyhow::Result;
use clap::ValueEnum;
use grundy::{
    games::{all_but::AllBut, subtraction::Subtraction},
    ruleset::MoveOracle,
};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Game {
    /// Remove any amount from the set
    Subtraction,

    /// Move to any smaller position except the ones in the set
    AllBut,
}

impl Game {
    /// Ruleset of this game on a given set of moves
    pub fn ruleset(self, moves: &[u32]) -> Result<Ruleset> {
        let ruleset = match self {
            Game::Subtraction => Ruleset::Subtraction(Subtraction::new(moves.to_vec())?),
            Game::AllBut => Ruleset::AllBut(AllBut::new(moves.to_vec())?),
        };
        Ok(ruleset)
    }

    /// Prefix of plot file names
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Game::Subtraction => "subtraction",
            Game::AllBut => "allbut",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Ruleset {
    Subtraction(Subtraction),
    AllBut(AllBut),
}

impl Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ruleset::Subtraction(game) => write!(f, "{game}"),
            Ruleset::AllBut(game) => write!(f, "{game}"),
        }
    }
}

impl MoveOracle for Ruleset {
    fn moves(&self, position: usize) -> Vec<usize> {
        match self {
            Ruleset::Subtraction(game) => game.moves(position),
            Ruleset::AllBut(game) => game.moves(position),
        }
    }
}
