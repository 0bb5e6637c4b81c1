//! Raw input and its normalization into literal items

/// Text to be escaped: one string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single string, split on commas only in list mode
    Single(String),
    /// A list of literal strings; always treated as a list
    List(Vec<String>),
}

impl Input {
    /// Whether the input is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Input::List(_))
    }

    /// The string of a single input
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Input::Single(s) => Some(s),
            Input::List(_) => None,
        }
    }

    /// Normalize into the ordered list of literal items.
    ///
    /// In list mode a string is split on commas; a list input has each of
    /// its elements split the same way. Fragments lose surrounding blanks
    /// (spaces and tabs) and are dropped when empty. Order and duplicates
    /// are kept. The result may be empty.
    pub fn items(&self, list: bool) -> Vec<String> {
        match self {
            Input::Single(s) if list => split_list(s),
            Input::Single(s) => vec![s.clone()],
            Input::List(items) => items.iter().flat_map(|item| split_list(item)).collect(),
        }
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|fragment| fragment.trim_matches([' ', '\t']))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Single(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Single(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Single(s.clone())
    }
}

impl From<Vec<String>> for Input {
    fn from(items: Vec<String>) -> Self {
        Input::List(items)
    }
}

impl From<Vec<&str>> for Input {
    fn from(items: Vec<&str>) -> Self {
        Input::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Input {
    fn from(items: &[&str]) -> Self {
        Input::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(items: [&str; N]) -> Self {
        Input::List(items.iter().map(|s| s.to_string()).collect())
    }
}
