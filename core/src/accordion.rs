//! FAQ accordion: at most one entry open.

/// Open/closed state of an accordion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// New accordion with the first entry open (if there is one).
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: (len > 0).then_some(0),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close `index` if it is open, otherwise open it and close the rest.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            log::warn!("faq: toggle({}) out of range (len {})", index, self.len);
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_open_by_default() {
        assert_eq!(Accordion::new(4).open_index(), Some(0));
        assert_eq!(Accordion::new(0).open_index(), None);
    }

    #[test]
    fn test_toggle_same_closes() {
        let mut faq = Accordion::new(4);
        faq.toggle(0);
        assert_eq!(faq.open_index(), None);
        faq.toggle(0);
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_opening_other_closes_previous() {
        let mut faq = Accordion::new(4);
        faq.toggle(2);
        assert!(faq.is_open(2));
        assert!(!faq.is_open(0));

        faq.toggle(3);
        let open: Vec<_> = (0..faq.len()).filter(|i| faq.is_open(*i)).collect();
        assert_eq!(open, vec![3]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut faq = Accordion::new(2);
        faq.toggle(7);
        assert_eq!(faq.open_index(), Some(0));
    }
}
