// Compound segmentation against a known-word list

use crate::wordlist::KnownWords;

/// Split a compound into known constituent words.
///
/// Split points are scanned left to right. At the first point whose front
/// piece is known, the tail must either be known itself or split further;
/// a front piece whose tail does neither is abandoned and the scan moves
/// on. Words that never split come back as a single piece. The scan is
/// greedy, so a short known front piece shadows longer alternatives even
/// when those would give a better segmentation.
pub fn segment(word: &str, known: &dyn KnownWords) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    segment_chars(&chars, known)
}

fn segment_chars(chars: &[char], known: &dyn KnownWords) -> Vec<String> {
    for i in 1..chars.len() {
        let front: String = chars[..i].iter().collect();
        if !known.contains(&front) {
            continue;
        }
        let tail: String = chars[i..].iter().collect();
        if known.contains(&tail) {
            return vec![front, tail];
        }
        let rest = segment_chars(&chars[i..], known);
        if rest.len() > 1 {
            let mut pieces = Vec::with_capacity(rest.len() + 1);
            pieces.push(front);
            pieces.extend(rest);
            return pieces;
        }
    }
    vec![chars.iter().collect()]
}
