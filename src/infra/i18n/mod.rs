pub mod json_translator;
