// Unicode NFKC normalization of tokens
use unicode_normalization::{is_nfkc, UnicodeNormalization};

/// NFKC form of `token`. Already-normalized input is returned as is.
pub fn normalize(token: String) -> String {
    if is_nfkc(&token) {
        token
    } else {
        token.nfkc().collect()
    }
}
