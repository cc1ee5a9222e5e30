//! Test utilities for CSV normalizer testing
//!
//! This module provides sample feeds and helper functions used across the
//! normalizer test modules.


use crate::app::models::RawRow;

/// A well-formed feed using the lowercase headers
pub fn create_standard_feed() -> String {
    "name,score,level,wins\n\
     Ada,100,Gold,12\n\
     Lin,250,Platinum,30\n\
     Bo,75.5,Silver,4\n"
        .to_string()
}

/// A feed using the alternate capitalised headers with ragged rows
pub fn create_ragged_feed() -> String {
    "Player,Points,Rank\n\
     Kim,300,Diamond\n\
     Sam,120\n\
     Jo,90,Bronze,extra\n"
        .to_string()
}

/// Text of a cell, panicking with a readable message if it is missing
pub fn cell_text<'a>(row: &'a RawRow, header: &str) -> &'a str {
    row.get(header)
        .unwrap_or_else(|| panic!("row has no '{}' cell: {:?}", header, row))
        .text()
}
