/// Banner printed when the shell starts.
pub fn welcome_message(title: &str) -> String {
    let width = title.chars().count() + 4;
    let border = "═".repeat(width);
    format!(
        "╔{border}╗\n║  {title}  ║\n╚{border}╝\n\
         Enter statements (insert, select, update, delete) or $print, $exit.\n\
         End a line with '\\' to continue it on the next line."
    )
}
