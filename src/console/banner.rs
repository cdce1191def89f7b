//! Start-up title painted with a horizontal colour gradient.

use colored::Colorize;

const TITLE: &str = r#"
 __     __     __     __   __        ______   ______     ______     __         ______
/\ \  _ \ \   /\ \   /\ "-.\ \      /\__  _\ /\  __ \   /\  __ \   /\ \       /\  ___\
\ \ \/ ".\ \  \ \ \  \ \ \-.  \     \/_/\ \/ \ \ \/\ \  \ \ \/\ \  \ \ \____  \ \___  \
 \ \__/".~\_\  \ \_\  \ \_\\"\_\       \ \_\  \ \_____\  \ \_____\  \ \_____\  \/\_____\
  \/_/   \/_/   \/_/   \/_/ \/_/        \/_/   \/_____/   \/_____/   \/_____/   \/_____/
"#;

static STOPS: [(f32, (u8, u8, u8)); 3] = [
    (0.0, (0xFA, 0x8B, 0xFF)),
    (0.5, (0x2B, 0xD2, 0xFF)),
    (1.0, (0x2B, 0xFF, 0x88)),
];

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Colour at position `t` in `[0, 1]`.
pub fn gradient_at(t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let segment = STOPS
        .windows(2)
        .find(|w| t <= w[1].0)
        .unwrap_or(&STOPS[1..]);
    let ((start, from), (end, to)) = (segment[0], segment[segment.len() - 1]);
    let local = if end > start { (t - start) / (end - start) } else { 1.0 };
    (
        lerp(from.0, to.0, local),
        lerp(from.1, to.1, local),
        lerp(from.2, to.2, local),
    )
}

pub fn render() -> String {
    let width = TITLE.lines().map(|l| l.chars().count()).max().unwrap_or(1).max(2);
    TITLE
        .lines()
        .map(|line| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| {
                    let (r, g, b) = gradient_at(col as f32 / (width - 1) as f32);
                    ch.to_string().truecolor(r, g, b).to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print() {
    println!("{}", render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_hits_the_stops() {
        assert_eq!(gradient_at(0.0), (0xFA, 0x8B, 0xFF));
        assert_eq!(gradient_at(0.5), (0x2B, 0xD2, 0xFF));
        assert_eq!(gradient_at(1.0), (0x2B, 0xFF, 0x88));
    }

    #[test]
    fn gradient_is_clamped() {
        assert_eq!(gradient_at(-3.0), gradient_at(0.0));
        assert_eq!(gradient_at(7.0), gradient_at(1.0));
    }

    #[test]
    fn gradient_blends_between_stops() {
        let (r, _, b) = gradient_at(0.25);
        assert!(r < 0xFA && r > 0x2B);
        assert_eq!(b, 0xFF);
    }
}
