pub(crate) const PROGRAM_SLUG: &str = "_";
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const DEFAULT_WIDTH: usize = 80;
