use regex::Regex;
use std::sync::LazyLock;

pub trait RandomSource {
    /// Uniform index in `0..n`. `n` is never zero.
    fn below(&mut self, n: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, n: usize) -> usize {
        self.usize(0..n)
    }
}

pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.below(items.len())]
}

/// Two different entries, sampled without replacement.
pub fn choose_pair<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> (&'a T, &'a T) {
    let first = rng.below(items.len());
    let mut second = rng.below(items.len() - 1);
    if second >= first {
        second += 1;
    }
    (&items[first], &items[second])
}

/// `#rrggbb` no lighter than `#777777`, so white heading text stays readable.
pub fn dark_color<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.below(0x777778))
}

pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*\n\s*<").expect("valid regex"));

/// HTML prepared for a JavaScript template literal that puts it on the clipboard.
pub fn clipboard_payload(html: &str) -> String {
    let escaped = html.replace('`', "\\`").replace('$', "\\$");
    BETWEEN_TAGS
        .replace_all(&escaped, "><")
        .replace('\n', "<br>")
}

/// Button plus script copying `payload` as rich text.
pub fn copy_button(payload: &str, label: &str, button_style: &str) -> String {
    format!(
        r#"<button onclick="copyRich()" style="{button_style}">{label}</button>
<script>
function copyRich() {{
    const html = `{payload}`;
    const blob = new Blob([html], {{ type: "text/html" }});
    const data = [new ClipboardItem({{ "text/html": blob }})];
    navigator.clipboard.write(data).then(() => alert("✅ 복사 완료!"));
}}
</script>"#
    )
}

#[cfg(test)]
pub mod testing {
    use super::RandomSource;

    pub struct Scripted {
        picks: Vec<usize>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, n: usize) -> usize {
            let pick = self.picks.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
            pick % n
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn pair_never_repeats() {
        let items = ["a", "b", "c"];
        for first in 0..3 {
            for second in 0..2 {
                let mut rng = Scripted::new(&[first, second]);
                let (x, y) = choose_pair(&mut rng, &items);
                assert_ne!(x, y);
            }
        }

        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let (x, y) = choose_pair(&mut rng, &items);
            assert_ne!(x, y);
        }
    }

    #[test]
    fn dark_color_is_bounded() {
        let mut rng = Scripted::new(&[0x777777, 0]);
        assert_eq!(dark_color(&mut rng), "#777777");
        assert_eq!(dark_color(&mut rng), "#000000");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("쿠팡파트너스", 2), "쿠팡");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn clipboard_payload_escapes_template_literal() {
        let html = "<div>\n  <p>`cost` $5</p>\n</div>\nline";
        assert_eq!(
            clipboard_payload(html),
            "<div><p>\\`cost\\` \\$5</p></div><br>line"
        );
    }

    #[test]
    fn copy_button_embeds_payload() {
        let snippet = copy_button("<b>hi</b>", "복사", "padding:20px;");
        assert!(snippet.contains("const html = `<b>hi</b>`;"));
        assert!(snippet.contains(">복사</button>"));
    }
}
