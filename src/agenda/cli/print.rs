use agenda::api::{CmdMessage, MessageLevel};
use agenda::config::ClockFormat;
use agenda::index::DisplayAppointment;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_appointments(appointments: &[DisplayAppointment], clock: ClockFormat) {
    if appointments.is_empty() {
        println!("No appointments scheduled.");
        return;
    }

    let idx_width = appointments.last().map_or(1, |dp| dp.index.to_string().len());
    for dp in appointments {
        println!("{}", format_row(dp, idx_width, clock));
    }
}

pub(super) fn print_appointment_detail(dp: &DisplayAppointment, clock: ClockFormat) {
    println!(
        "{} {}",
        format!("{}.", dp.index).yellow(),
        dp.appointment.name.bold()
    );
    println!("--------------------------------");
    println!(
        "when: {}",
        dp.appointment.when.format(clock.datetime_pattern())
    );
    println!("id:   {}", dp.appointment.id.to_string().dimmed());
}

fn format_row(dp: &DisplayAppointment, idx_width: usize, clock: ClockFormat) -> String {
    let idx = format!("{:>width$}. ", dp.index, width = idx_width);
    let name = truncate_to_width(&dp.appointment.name, NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(name.width());
    let when = dp.appointment.when.format(clock.datetime_pattern()).to_string();

    format!(
        "  {}{}{}  {}",
        idx.yellow(),
        name.bold(),
        " ".repeat(padding),
        when.dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
