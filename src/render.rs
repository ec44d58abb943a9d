use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::{Color, ColoredString, Colorize};

use crate::classify::{Classification, Status, classify_match};
use crate::model::game::Match;

/// Width of the progress bar in characters.
pub const SCREEN_WIDTH: usize = 68;
const NAME_WIDTH: usize = 30;

/// Terminal background the palette is tuned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Background {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bright: bool,
}

impl Style {
    const fn bright(color: Color) -> Self {
        Self { color, bright: true }
    }

    const fn normal(color: Color) -> Self {
        Self { color, bright: false }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let painted = text.color(self.color);
        if self.bright { painted.bold() } else { painted }
    }
}

/// Colours for one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub filled: Style,
    pub empty: Style,
    /// Header and status line of a match that has kicked off.
    pub started: Style,
    pub upcoming: Style,
    pub upcoming_status: Style,
}

impl Palette {
    pub fn for_background(background: Background) -> Self {
        match background {
            Background::Dark => Palette {
                filled: Style::bright(Color::Blue),
                empty: Style::bright(Color::Green),
                started: Style::bright(Color::Green),
                upcoming: Style::normal(Color::Blue),
                upcoming_status: Style::bright(Color::White),
            },
            Background::Light => Palette {
                filled: Style::bright(Color::Green),
                empty: Style::bright(Color::Blue),
                started: Style::bright(Color::Green),
                upcoming: Style::normal(Color::Black),
                upcoming_status: Style::normal(Color::Magenta),
            },
        }
    }

    fn header(&self, status: Status) -> Style {
        if status.has_started() { self.started } else { self.upcoming }
    }

    fn status_line(&self, status: Status) -> Style {
        if status.has_started() { self.started } else { self.upcoming_status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub body: char,
    pub separator: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { body: '-', separator: 'o' }
    }
}

/// Character counts making up a bar: `filled` body glyphs, an optional separator, `empty` body glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub filled: usize,
    pub separator: bool,
    pub empty: usize,
}

impl Segments {
    pub fn total(&self) -> usize {
        self.filled + usize::from(self.separator) + self.empty
    }
}

/// Split `width` characters for a completion percentage. Percentages above 100 count as 100.
pub fn segments(percentage: u8, width: usize) -> Segments {
    match percentage.min(100) {
        100 => Segments { filled: width, separator: false, empty: 0 },
        0 => Segments { filled: 0, separator: false, empty: width },
        p => {
            // The separator occupies the last completed cell; keep at least one.
            let completed = (width * usize::from(p) / 100).clamp(1, width);
            Segments { filled: completed - 1, separator: true, empty: width - completed }
        }
    }
}

/// Uncoloured progress bar, exactly `width` characters long.
pub fn progress_bar(percentage: u8, width: usize, glyphs: Glyphs) -> String {
    let s = segments(percentage, width);
    let mut bar = String::with_capacity(s.total());
    bar.extend(std::iter::repeat_n(glyphs.body, s.filled));
    if s.separator {
        bar.push(glyphs.separator);
    }
    bar.extend(std::iter::repeat_n(glyphs.body, s.empty));
    bar
}

/// Turns matches into printable text blocks with an explicit palette, glyph set and width.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub width: usize,
}

impl Renderer {
    pub fn new(background: Background) -> Self {
        Self { palette: Palette::for_background(background), glyphs: Glyphs::default(), width: SCREEN_WIDTH }
    }

    /// Coloured bar: the filled run and separator in the filled style, the rest in the empty style.
    pub fn bar(&self, percentage: u8) -> String {
        let s = segments(percentage, self.width);
        let body = self.glyphs.body.to_string();
        let mut filled = body.repeat(s.filled);
        if s.separator {
            filled.push(self.glyphs.separator);
        }
        let empty = body.repeat(s.empty);

        let mut out = String::new();
        if !filled.is_empty() {
            out.push_str(&self.palette.filled.paint(&filled).to_string());
        }
        if !empty.is_empty() {
            out.push_str(&self.palette.empty.paint(&empty).to_string());
        }
        out
    }

    /// Format an already classified match into a block of three indented lines.
    pub fn block(&self, game: &Match, classification: &Classification) -> String {
        let status = classification.progress.status;
        let header = format!(
            "{:<name$} {} - {} {:>name$}",
            game.home_team.country_name(),
            game.home_team.goal_count(),
            game.away_team.goal_count(),
            game.away_team.country_name(),
            name = NAME_WIDTH,
        );
        format!(
            "\n     {}\n    {}\n    \u{26BD}  {}\n",
            self.palette.header(status).paint(&header),
            self.bar(classification.progress.percentage),
            self.palette.status_line(status).paint(&classification.message),
        )
    }

    /// Classify and format one match. `None` when the kickoff time is missing or unparseable.
    pub fn render_match(&self, game: &Match, now: DateTime<Utc>) -> Option<String> {
        let classification = classify_match(game, now)?;
        Some(self.block(game, &classification))
    }
}
