use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;

use failure::Error;
use itertools::Itertools;
use tracing::error;

use crate::input::read_input_file;

fn parse_box_id(s: &str) -> Result<String, Infallible> {
    Ok(s.trim().to_string())
}

pub(crate) fn read_box_ids(path: &Path) -> Result<Vec<String>, Error> {
    read_input_file(path, parse_box_id).map_err(|e| {
        error!("Could not open or read the file containing the box IDs.");
        e.into()
    })
}

/// Whether `boxid` has some letter exactly twice, and some letter exactly
/// three times, as 0/1 counts.
pub(crate) fn box_checksum(boxid: &str) -> (usize, usize) {
    let mut counts = HashMap::new();

    for c in boxid.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let twos = counts.values().any(|&v| v == 2) as usize;
    let threes = counts.values().any(|&v| v == 3) as usize;

    (twos, threes)
}

pub(crate) fn count_letter_repeats<'a, T>(boxes: T) -> (usize, usize)
where
    T: Iterator<Item = &'a str>,
{
    boxes.fold((0, 0), |(twos, threes), boxid| {
        let r = box_checksum(boxid);
        (twos + r.0, threes + r.1)
    })
}

pub(crate) fn boxes_checksum<'a, T>(boxes: T) -> usize
where
    T: Iterator<Item = &'a str>,
{
    let (twos, threes) = count_letter_repeats(boxes);
    twos * threes
}

/// Letters that sit at the same position in both IDs.
///
/// Only the overlapping prefix is compared when the lengths differ.
pub(crate) fn common_letters(boxid_a: &str, boxid_b: &str) -> String {
    boxid_a
        .chars()
        .zip(boxid_b.chars())
        .filter(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect()
}

/// Common letters of the first pair of IDs (in input order) where all but one
/// position of the first ID is shared with the second.
pub(crate) fn find_box_ids_that_differ_by_one_letter(boxids: &[String]) -> Option<String> {
    boxids
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let wanted = a.chars().count().checked_sub(1)?;
            let common = common_letters(a, b);
            if common.chars().count() == wanted {
                Some(common)
            } else {
                None
            }
        })
        .next()
}

pub(crate) fn main(path: &Path) -> Result<(), Error> {
    let boxids = read_box_ids(path)?;

    println!(
        "Part 1: {}",
        boxes_checksum(boxids.iter().map(|s| s.as_str()))
    );

    match find_box_ids_that_differ_by_one_letter(&boxids) {
        Some(common) => println!("Part 2: The common letters are: {}.", common),
        None => println!("Part 2: No box ids found that only differ by one letter."),
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use proptest::prelude::*;
    use std::io::Write;

    fn box_ids() -> Vec<&'static str> {
        vec![
            "abcdef", "bababc", "abbcde", "abcccd", "aabcdd", "abcdee", "ababab",
        ]
    }

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn example_part1() {
        assert_eq!(box_checksum("abcdef"), (0, 0));
        assert_eq!(box_checksum("bababc"), (1, 1));
        assert_eq!(box_checksum("abbcde"), (1, 0));
        assert_eq!(box_checksum("abcccd"), (0, 1));
        assert_eq!(box_checksum("aabcdd"), (1, 0));
        assert_eq!(box_checksum("abcdee"), (1, 0));
        assert_eq!(box_checksum("ababab"), (0, 1));

        assert_eq!(count_letter_repeats(box_ids().into_iter()), (4, 3));
        assert_eq!(boxes_checksum(box_ids().into_iter()), 12)
    }

    #[test]
    fn four_of_a_kind_is_neither() {
        assert_eq!(box_checksum("aaaab"), (0, 0));
        assert_eq!(box_checksum(""), (0, 0));
    }

    #[test]
    fn example_part2() {
        let boxids: Vec<String> = "abcde
                      fghij
                      klmno
                      pqrst
                      fguij
                      axcye
                      wvxyz"
            .split('\n')
            .map(|s| s.trim().to_string())
            .collect();

        assert_eq!(
            find_box_ids_that_differ_by_one_letter(&boxids),
            Some("fgij".to_string())
        );

        assert_eq!(common_letters("fghij", "fguij"), "fgij".to_string())
    }

    #[test]
    fn no_close_pair() {
        let boxids = owned(&["abcde", "axcye", "wvxyz"]);
        assert_eq!(find_box_ids_that_differ_by_one_letter(&boxids), None);
        assert_eq!(find_box_ids_that_differ_by_one_letter(&[]), None);
        assert_eq!(find_box_ids_that_differ_by_one_letter(&owned(&["abc"])), None);
    }

    #[test]
    fn first_pair_wins() {
        let boxids = owned(&["xbc", "abd", "abc", "xbd"]);
        // (xbc, abc) qualifies before (abd, abc).
        assert_eq!(
            find_box_ids_that_differ_by_one_letter(&boxids),
            Some("bc".to_string())
        );
    }

    #[test]
    fn mismatched_lengths_compare_overlap() {
        assert_eq!(common_letters("abcd", "abc"), "abc".to_string());
        assert_eq!(
            find_box_ids_that_differ_by_one_letter(&owned(&["abcd", "abc"])),
            Some("abc".to_string())
        );
        assert_eq!(
            find_box_ids_that_differ_by_one_letter(&owned(&["abc", "abcd"])),
            None
        );
    }

    #[test]
    fn reads_trimmed_ids() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "abcde  \n  fghij").unwrap();

        assert_eq!(read_box_ids(f.path()).unwrap(), owned(&["abcde", "fghij"]));
    }

    proptest! {
        #[test]
        fn counts_are_bounded(ids in prop::collection::vec("[a-e]{0,8}", 0..40)) {
            let (twos, threes) = count_letter_repeats(ids.iter().map(|s| s.as_str()));
            prop_assert!(twos <= ids.len());
            prop_assert!(threes <= ids.len());
        }

        #[test]
        fn finds_a_single_substitution(id in "[a-z]{2,12}", at in any::<prop::sample::Index>()) {
            let pos = at.index(id.len());
            let mut changed: Vec<char> = id.chars().collect();
            changed[pos] = if changed[pos] == 'z' { 'y' } else { 'z' };
            let changed: String = changed.into_iter().collect();

            let mut expected = id.clone();
            expected.remove(pos);

            prop_assert_eq!(
                find_box_ids_that_differ_by_one_letter(&[id, changed]),
                Some(expected)
            );
        }
    }
}
