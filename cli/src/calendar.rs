use chrono::{Datelike, NaiveDate, Weekday};
use growmate_core::{CareSchedule, DayMarks, DotKind};

const KINDS: [DotKind; 6] = [
    DotKind::Watered,
    DotKind::DueWater,
    DotKind::MissedWater,
    DotKind::Fertilized,
    DotKind::DueFertilize,
    DotKind::MissedFertilize,
];

fn glyph(kind: DotKind) -> (&'static str, &'static str) {
    // (ANSI color, symbol)
    match kind {
        DotKind::Watered => ("\x1b[32m", "w"),
        DotKind::DueWater => ("\x1b[33m", "W"),
        DotKind::MissedWater => ("\x1b[34m", "m"),
        DotKind::Fertilized => ("\x1b[35m", "f"),
        DotKind::DueFertilize => ("\x1b[31m", "F"),
        DotKind::MissedFertilize => ("\x1b[91m", "x"),
    }
}

fn cell(day: u32, marks: Option<&DayMarks>) -> String {
    let mut glyphs = String::new();
    let mut visible = 0usize;
    if let Some(marks) = marks {
        for kind in KINDS {
            if marks.has(kind) {
                let (color, symbol) = glyph(kind);
                glyphs.push_str(color);
                glyphs.push_str(symbol);
                glyphs.push_str("\x1b[0m");
                visible += 1;
            }
        }
    }
    let selected = marks.map(|m| m.selected).unwrap_or(false);
    let day_str = if selected {
        format!("\x1b[1;7m{:>2}\x1b[0m", day)
    } else {
        format!("{:>2}", day)
    };
    // Pad to a fixed visible width of 7 so the grid stays aligned despite
    // the ANSI escapes.
    format!("{}{}{}", day_str, glyphs, " ".repeat(5 - visible.min(5)))
}

pub fn render_month(schedule: &CareSchedule, year: i32, month: u32) {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => {
            println!("Invalid month: {}-{:02}", year, month);
            return;
        }
    };

    println!("\n\x1b[1m{}\x1b[0m", first.format("%B %Y"));
    println!("Mo      Tu      We      Th      Fr      Sa      Su");

    let mut line = String::new();
    let leading = first.weekday().num_days_from_monday() as usize;
    line.push_str(&" ".repeat(leading * 8));

    let mut current = first;
    while current.month() == month {
        line.push_str(&cell(current.day(), schedule.marks.get(current)));
        line.push(' ');
        if current.weekday() == Weekday::Sun {
            println!("{}", line.trim_end());
            line.clear();
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    if !line.trim_end().is_empty() {
        println!("{}", line.trim_end());
    }
}

pub fn render_legend() {
    println!();
    for kind in KINDS {
        let (color, symbol) = glyph(kind);
        println!("  {}{}\x1b[0m  {}", color, symbol, kind.label());
    }
}

pub fn render_stats(schedule: &CareSchedule) {
    let stats = &schedule.stats;
    println!("\x1b[1mCare summary for {}\x1b[0m", schedule.today.format("%Y-%m-%d"));
    println!("  To water today:       {}", stats.due_water_today);
    println!("  To fertilize today:   {}", stats.due_fertilize_today);
    println!("  Watered this month:   {}", stats.watered_this_month);
    println!("  Fertilized this month: {}", stats.fertilized_this_month);
}
