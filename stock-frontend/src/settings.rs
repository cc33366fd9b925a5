use std::path::PathBuf;

#[derive(Debug)]
pub struct Settings {
    pub products_path: Option<PathBuf>,
    pub show_border: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            products_path: None,
            show_border: true,
        }
    }
}
