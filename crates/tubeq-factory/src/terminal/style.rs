use dialoguer::console::Style;
use tubeq_core::Tone;

pub const BANNER: &str = r"
__  ________      ____  __
\ \/ /_  __/     / __ \/ /
 \  / / /______ / / / / /
 / / / /_____// /_/ / /___
/_/ /_/      /_____/_____/
";

pub const DONE_BANNER: &str = r"
    ____  ____  _   ________
   / __ \/ __ \/ | / / ____/
  / / / / / / /  |/ / __/
 / /_/ / /_/ / /|  / /___
/_____/\____/_/ |_/_____/
";

pub fn style_for(tone: Tone) -> Style {
    match tone {
        Tone::Banner => Style::new().green().bright().bold(),
        Tone::Heading => Style::new().magenta().bright(),
        Tone::Info => Style::new().blue().bright(),
        Tone::Item => Style::new().cyan().bright(),
        Tone::Success => Style::new().green().bright(),
        Tone::Warning => Style::new().yellow().bright(),
        Tone::Error => Style::new().red().bright(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styling_keeps_the_text() {
        let styled = style_for(Tone::Warning)
            .force_styling(false)
            .apply_to("careful")
            .to_string();
        assert_eq!(styled, "careful");
    }
}
