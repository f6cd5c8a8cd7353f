use crate::error::WidgetError;
use web_sys::FileList;

/// An ordered set of picked files, as far as the widget cares about them.
pub trait Selection {
    fn len(&self) -> usize;
    fn name_at(&self, index: usize) -> Option<String>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Selection for FileList {
    fn len(&self) -> usize {
        self.length() as usize
    }

    fn name_at(&self, index: usize) -> Option<String> {
        self.get(index as u32).map(|file| file.name())
    }
}

impl<S: AsRef<str>> Selection for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn name_at(&self, index: usize) -> Option<String> {
        self.get(index).map(|name| name.as_ref().to_string())
    }
}

/// Name of the first picked file. Anything after it is ignored.
pub fn first_file_name<S: Selection + ?Sized>(selection: &S) -> Result<String, WidgetError> {
    selection.name_at(0).ok_or(WidgetError::EmptySelection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_name() {
        let picked = ["vacation.mov"];
        assert_eq!(first_file_name(&picked[..]).unwrap(), "vacation.mov");
    }

    #[test]
    fn ignores_additional_files() {
        let picked = vec!["clip1.mp4".to_string(), "clip2.mp4".to_string()];
        assert_eq!(first_file_name(picked.as_slice()).unwrap(), "clip1.mp4");
    }

    #[test]
    fn empty_selection_is_an_error() {
        let picked: [&str; 0] = [];
        assert!(picked[..].is_empty());
        assert_eq!(first_file_name(&picked[..]), Err(WidgetError::EmptySelection));
    }

    #[test]
    fn name_is_not_transformed() {
        let picked = ["  <b>weird & name</b>.mp4 "];
        assert_eq!(first_file_name(&picked[..]).unwrap(), "  <b>weird & name</b>.mp4 ");
    }
}
