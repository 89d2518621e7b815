//! Puzzle definition: grid structure, slot variables, overlaps and word list

use super::{Direction, Overlap, PuzzleError, Variable};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

/// A crossword puzzle ready to be solved.
///
/// Read-only once built. Variables are kept in sorted order, which is also the
/// order used for every iteration the solver performs.
#[derive(Debug, Clone)]
pub struct Crossword {
    pub height: usize,
    pub width: usize,
    structure: Vec<Vec<bool>>,
    words: BTreeSet<String>,
    variables: Vec<Variable>,
    overlaps: HashMap<(Variable, Variable), Overlap>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl Crossword {
    /// Build a puzzle from an open/blocked cell grid (`true` is open).
    ///
    /// Every maximal run of two or more open cells, across or down, becomes a
    /// variable.
    pub fn new(structure: Vec<Vec<bool>>, words: BTreeSet<String>) -> Result<Self, PuzzleError> {
        let height = structure.len();
        let width = structure.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyStructure);
        }
        for (row, cells) in structure.iter().enumerate() {
            if cells.len() != width {
                return Err(PuzzleError::RaggedStructure {
                    row,
                    found: cells.len(),
                    expected: width,
                });
            }
        }

        let variables = extract_variables(&structure);
        Ok(Self::assemble(height, width, structure, variables, words))
    }

    /// Build a puzzle from explicit variables. Cells covered by a variable are open,
    /// everything else is blocked.
    pub fn from_variables(
        height: usize,
        width: usize,
        variables: Vec<Variable>,
        words: BTreeSet<String>,
    ) -> Result<Self, PuzzleError> {
        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyStructure);
        }

        let mut structure = vec![vec![false; width]; height];
        for variable in &variables {
            if variable.length == 0 {
                return Err(PuzzleError::ZeroLengthVariable(variable.clone()));
            }
            let fits = variable
                .checked_end()
                .is_some_and(|(last_row, last_col)| last_row < height && last_col < width);
            if !fits {
                return Err(PuzzleError::VariableOutOfBounds {
                    variable: variable.clone(),
                    height,
                    width,
                });
            }
            for (row, col) in variable.cells() {
                structure[row][col] = true;
            }
        }

        let variables = variables.into_iter().sorted().dedup().collect();
        Ok(Self::assemble(height, width, structure, variables, words))
    }

    fn assemble(
        height: usize,
        width: usize,
        structure: Vec<Vec<bool>>,
        mut variables: Vec<Variable>,
        words: BTreeSet<String>,
    ) -> Self {
        variables.sort();

        let mut overlaps = HashMap::new();
        for (x, y) in variables.iter().tuple_combinations() {
            if let Some(overlap) = shared_cell(x, y) {
                overlaps.insert((x.clone(), y.clone()), overlap);
                overlaps.insert((y.clone(), x.clone()), overlap.reversed());
            }
        }

        let neighbors = variables
            .iter()
            .map(|v| {
                let adjacent = variables
                    .iter()
                    .filter(|other| *other != v && overlaps.contains_key(&(v.clone(), (*other).clone())))
                    .cloned()
                    .collect();
                (v.clone(), adjacent)
            })
            .collect();

        Self {
            height,
            width,
            structure,
            words,
            variables,
            overlaps,
            neighbors,
        }
    }

    /// All slot variables in puzzle order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The universal candidate pool
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Whether the cell at (row, col) is open. Out of bounds cells are blocked.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.structure
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Overlap between two distinct variables, if they share a cell
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(x.clone(), y.clone())).copied()
    }

    /// Every variable sharing a cell with `variable`, in puzzle order
    pub fn neighbors(&self, variable: &Variable) -> &[Variable] {
        self.neighbors
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every ordered pair of variables that share a cell
    pub fn arcs(&self) -> Vec<(Variable, Variable)> {
        self.variables
            .iter()
            .flat_map(|x| {
                self.neighbors(x)
                    .iter()
                    .map(move |y| (x.clone(), y.clone()))
            })
            .collect()
    }

    /// Number of unordered overlapping pairs
    pub fn overlap_count(&self) -> usize {
        self.overlaps.len() / 2
    }
}

/// Scan the structure for runs of open cells, across then down per cell, the way
/// a solver would number the clues.
fn extract_variables(structure: &[Vec<bool>]) -> Vec<Variable> {
    let height = structure.len();
    let width = structure.first().map_or(0, Vec::len);
    let mut variables = Vec::new();

    for row in 0..height {
        for col in 0..width {
            if !structure[row][col] {
                continue;
            }

            if row == 0 || !structure[row - 1][col] {
                let length = (row..height).take_while(|&r| structure[r][col]).count();
                if length > 1 {
                    variables.push(Variable::new(row, col, Direction::Down, length));
                }
            }

            if col == 0 || !structure[row][col - 1] {
                let length = (col..width).take_while(|&c| structure[row][c]).count();
                if length > 1 {
                    variables.push(Variable::new(row, col, Direction::Across, length));
                }
            }
        }
    }

    variables
}

/// First cell (in x's letter order) that x and y both cover
fn shared_cell(x: &Variable, y: &Variable) -> Option<Overlap> {
    let y_cells = y.cells();
    x.cells().iter().enumerate().find_map(|(i, cell)| {
        y_cells
            .iter()
            .position(|other| other == cell)
            .map(|j| Overlap::new(i, j))
    })
}
