use std::sync::OnceLock;

use regex::Regex;
use unidecode::unidecode;

/// Builds a site address (the `blog_name` the backend expects) out of a
/// store name: ascii letters and digits only, lowercased.
#[derive(Debug)]
pub struct SiteAddress {
  pub min_length: usize,
  pub max_length: usize,
}

impl Default for SiteAddress {
  fn default() -> Self {
    Self { min_length: 4, max_length: 50 }
  }
}

// Anything that is neither an ascii letter nor a digit.
fn non_alnum_regex() -> &'static Regex {
  static RE_NON_ALNUM: OnceLock<Regex> = OnceLock::new();
  RE_NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

fn valid_address_regex() -> &'static Regex {
  static RE_VALID: OnceLock<Regex> = OnceLock::new();
  RE_VALID.get_or_init(|| Regex::new(r"^[a-z0-9]+$").expect("static regex"))
}

impl SiteAddress {
  /// Input: " Café Zelda 2.0: Special_Edition! "
  /// Steps:
  ///   unidecode: " Cafe Zelda 2.0: Special_Edition! "
  ///   Lowercase: " cafe zelda 2.0: special_edition! "
  ///   Drop everything else: "cafezelda20specialedition"
  ///   Length limit (e.g., max=12): "cafezelda20s"
  pub fn generate(&self, name: &str) -> String {
    let lowered = unidecode(name).to_lowercase();
    let mut address = non_alnum_regex().replace_all(&lowered, "").to_string();
    address.truncate(self.max_length);
    address
  }

  pub fn is_valid(&self, address: &str) -> bool {
    (self.min_length..=self.max_length).contains(&address.len())
      && valid_address_regex().is_match(address)
  }
}
