#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViewPort {
    pub height: usize,
    pub vertical_index: usize,
}

impl ViewPort {
    pub fn update_by_cursor(&mut self, cursor: usize) {
        if self.height == 0 {
            self.vertical_index = 0;
            return;
        }

        if cursor < self.vertical_index {
            self.vertical_index = cursor;
        } else if cursor >= self.vertical_index + self.height {
            self.vertical_index = cursor + 1 - self.height;
        }
    }

    pub fn visible(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.vertical_index.min(len);
        let end = (start + self.height).min(len);
        start..end
    }
}
