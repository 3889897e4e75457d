/// Состояние кнопки "Read More" у поста блога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadMoreState {
    pub expanded: bool,
}

impl ReadMoreState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            "Read Less"
        } else {
            "Read More"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_label() {
        let mut state = ReadMoreState::default();
        assert!(!state.expanded);
        assert_eq!(state.button_label(), "Read More");

        state.toggle();
        assert!(state.expanded);
        assert_eq!(state.button_label(), "Read Less");

        state.toggle();
        assert_eq!(state.button_label(), "Read More");
    }
}
