// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Statement;

/// The root of every parse: a flat sequence of top-level statements, the way
/// a REPL line or a whole source file is just "a list of statements" with no
/// enclosing module or function wrapper.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
