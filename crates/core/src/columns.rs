//! Column identities and the user-ordered column selection.
//!
//! Columns are addressed by numeric tokens `0..4` on the command line and by
//! their display labels when rendered as a table header.

#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Namespace,
    Pod,
    Container,
    Image,
    ImagePullPolicy,
}

impl ColumnId {
    pub const ALL: [ColumnId; 5] = [
        ColumnId::Namespace,
        ColumnId::Pod,
        ColumnId::Container,
        ColumnId::Image,
        ColumnId::ImagePullPolicy,
    ];

    /// Map a `--columns` token to a column. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(ColumnId::Namespace),
            "1" => Some(ColumnId::Pod),
            "2" => Some(ColumnId::Container),
            "3" => Some(ColumnId::Image),
            "4" => Some(ColumnId::ImagePullPolicy),
            _ => None,
        }
    }

    /// Table header label.
    pub fn label(self) -> &'static str {
        match self {
            ColumnId::Namespace => "Namespace",
            ColumnId::Pod => "Pod",
            ColumnId::Container => "Container",
            ColumnId::Image => "Image",
            ColumnId::ImagePullPolicy => "ImagePullPolicy",
        }
    }
}

/// Ordered list of columns to project. Keeps user order and duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Vec<ColumnId>);

impl Selection {
    /// Parse a comma-separated token list such as `"1, 2,3"`.
    pub fn parse(input: &str) -> Self {
        Selection(input.split(',').map(str::trim).filter_map(ColumnId::from_token).collect())
    }

    pub fn columns(&self) -> &[ColumnId] {
        &self.0
    }

    pub fn contains(&self, col: ColumnId) -> bool {
        self.0.contains(&col)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.label()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_user_order() {
        let sel = Selection::parse("3,0,1");
        assert_eq!(sel.columns(), &[ColumnId::Image, ColumnId::Namespace, ColumnId::Pod]);
    }

    #[test]
    fn parse_ignores_unknown_and_trims() {
        let sel = Selection::parse(" 1 , 7,x,,2 ");
        assert_eq!(sel.columns(), &[ColumnId::Pod, ColumnId::Container]);
    }

    #[test]
    fn parse_keeps_duplicates() {
        let sel = Selection::parse("2,2");
        assert_eq!(sel.columns(), &[ColumnId::Container, ColumnId::Container]);
    }

    #[test]
    fn default_columns_labels() {
        assert_eq!(Selection::parse("1,2,3").labels(), vec!["Pod", "Container", "Image"]);
        assert!(Selection::parse("").is_empty());
    }

    #[test]
    fn tokens_cover_every_column() {
        let all: Vec<_> = ["0", "1", "2", "3", "4"].iter().filter_map(|t| ColumnId::from_token(t)).collect();
        assert_eq!(all, ColumnId::ALL.to_vec());
    }
}
