use crate::solvers::AStarSearch;
use crate::UserState;
use itertools::Itertools;
use std::error::Error;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;

/// Reads an m x n matrix from an input str stream, e.g., the terrain costs of a grid map.
///
/// # Examples
///
/// ```
/// use rastar::io;
///
/// let string = "1 1 9 \n 1 9 1 \n 1 1 1";
///
/// let mut lines = string.split_whitespace();
/// let matrix = io::read_matrix::<u8>(&mut lines, 3, 3).unwrap();
/// assert_eq!(matrix, vec![vec![1, 1, 9], vec![1, 9, 1], vec![1, 1, 1]]);
/// ```
pub fn read_matrix<'a, T>(
    input: &mut impl Iterator<Item = &'a str>,
    m: usize,
    n: usize,
) -> Result<Vec<Vec<T>>, <T as FromStr>::Err>
where
    T: FromStr,
{
    input
        .take(m * n)
        .chunks(n)
        .into_iter()
        .map(|chunk| chunk.into_iter().map(|x| x.parse::<T>()).collect())
        .collect()
}

/// Formats the solution path of a search, one `step, g, state` line per node.
pub fn format_solution_path<S>(search: &AStarSearch<S>) -> String
where
    S: UserState + Display,
    S::CostType: Display,
{
    search
        .get_solution_path()
        .enumerate()
        .map(|(step, node)| format!("{}, {}, {}\n", step, node.get_g(), node.get_state()))
        .join("")
}

/// Writes the solution path of a search to a CSV file.
///
/// The first field is the position on the path, the second is the path cost, and the third is the state.
pub fn dump_solution_path<S>(search: &AStarSearch<S>, filename: &str) -> Result<(), Box<dyn Error>>
where
    S: UserState + Display,
    S::CostType: Display,
{
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(filename)?;
    file.write_all(format_solution_path(search).as_bytes())?;
    file.flush()?;

    Ok(())
}
