/// Отладочное расширение строк: делает пробельные символы видимыми.
pub trait WhitespaceVisible {
    fn whitespace_visible(&self) -> String;
}

impl WhitespaceVisible for str {
    fn whitespace_visible(&self) -> String {
        self.chars()
            .map(|c| match c {
                '\r' => '←',
                '\n' => '↓',
                ' ' => '·',
                '\t' => '→',
                other => other,
            })
            .collect()
    }
}
