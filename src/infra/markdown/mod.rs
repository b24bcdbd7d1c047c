pub mod safe_markdown;
