use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Standard Scrabble letter values
pub static LETTER_SCORES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'R', 'S', 'T'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['D', 'G'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'M', 'P'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['F', 'H', 'V', 'W', 'Y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('K', 5);

    // 8 points
    for ch in ['J', 'X'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['Q', 'Z'] {
        map.insert(ch, 10);
    }

    map
});

/// Standard tile bag distribution (98 letter tiles, no blanks)
pub static TILE_DISTRIBUTION: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert('E', 12);
    for ch in ['A', 'I'] {
        map.insert(ch, 9);
    }
    map.insert('O', 8);
    for ch in ['N', 'R', 'T'] {
        map.insert(ch, 6);
    }
    for ch in ['D', 'L', 'S', 'U'] {
        map.insert(ch, 4);
    }
    map.insert('G', 3);
    for ch in ['B', 'C', 'F', 'H', 'M', 'P', 'V', 'W', 'Y'] {
        map.insert(ch, 2);
    }
    for ch in ['J', 'K', 'Q', 'X', 'Z'] {
        map.insert(ch, 1);
    }

    map
});

/// Get the point value for a letter. Non-letters score 0.
pub fn letter_score(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    LETTER_SCORES.get(&upper).copied().unwrap_or(0)
}
