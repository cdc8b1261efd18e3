mod animated_text;
mod info_section;
mod language_toggle;

pub use animated_text::{AnimatedText, TextElement, word_schedule};
pub use info_section::{InfoSection, SectionContent, SectionModel, resolve_text, section_class};
pub use language_toggle::LanguageToggle;
