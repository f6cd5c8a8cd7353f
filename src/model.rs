use std::rc::Rc;
use yew::functional::Reducible;

/// One rendered row: the name of a picked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub name: String,
}

impl VideoEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Append-only list of entries in arrival order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries {
    items: Vec<VideoEntry>,
}

impl Entries {
    pub fn push(&mut self, name: impl Into<String>) {
        self.items.push(VideoEntry::new(name));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoEntry> {
        self.items.iter()
    }
}

impl Reducible for Entries {
    type Action = String;

    fn reduce(self: Rc<Self>, name: String) -> Rc<Self> {
        let mut next = (*self).clone();
        next.push(name);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &Entries) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn push_preserves_arrival_order() {
        let mut entries = Entries::default();
        entries.push("a.mp4");
        entries.push("b.mp4");
        entries.push("c.mp4");
        assert_eq!(names(&entries), ["a.mp4", "b.mp4", "c.mp4"]);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let mut entries = Entries::default();
        entries.push("same.mov");
        entries.push("same.mov");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn reduce_appends_without_touching_previous_state() {
        let before = Rc::new(Entries::default());
        let after = before.clone().reduce("vacation.mov".to_string());
        assert!(before.is_empty());
        assert_eq!(names(&after), ["vacation.mov"]);
    }
}
