use prime_pages::presentation::events::{write_typed_event, ErrorEvent};
use prime_pages::{LineSink, PrimeError, WriterSink};

const COMMAND: &str = "print";

pub fn format_prime_error(err: &PrimeError) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(fix) = suggested_fix(err) {
        out.push_str(&format!("  ↳ {}\n", fix));
    }
    out
}

fn suggested_fix(err: &PrimeError) -> Option<&'static str> {
    match err {
        PrimeError::InvalidArgument { name: "count", .. } => {
            Some("Pass a positive --count, for example --count 1000.")
        }
        PrimeError::InvalidArgument {
            name: "rows_per_page",
            ..
        } => Some("Pass a positive --rows value."),
        PrimeError::InvalidArgument {
            name: "columns_per_page",
            ..
        } => Some("Pass a positive --columns value."),
        PrimeError::InvalidArgument {
            name: "column_width",
            ..
        } => Some("Pass a positive --width value."),
        PrimeError::Capacity { .. } | PrimeError::PageTooLarge { .. } => {
            Some("Request fewer primes or a smaller page.")
        }
        PrimeError::InvalidConfig { .. } => Some("Fix the configuration file and try again."),
        PrimeError::ConfigRead { .. } => Some("Check the --config path."),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(prime) = err.downcast_ref::<PrimeError>() {
        return format_prime_error(prime);
    }

    format!("[ERROR] {}\n", err)
}

fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<PrimeError>()
        .map(PrimeError::code)
        .unwrap_or("error")
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let mut stdout = WriterSink::new(std::io::stdout().lock());
    let mut stderr = WriterSink::new(std::io::stderr().lock());
    report_error(err, json, &mut stdout, &mut stderr);
}

/// Report `err` as a JSON event on `events`, or as text on `diagnostics`.
///
/// If the event cannot be written the text form goes to `diagnostics`, so
/// a failure is never silent.
fn report_error(
    err: &anyhow::Error,
    json: bool,
    events: &mut impl LineSink,
    diagnostics: &mut impl LineSink,
) {
    if json {
        let event = ErrorEvent::new(COMMAND, error_code(err), err.to_string());
        if write_typed_event(events, &event).is_ok() && events.flush().is_ok() {
            return;
        }
    }

    for line in format_error(err).lines() {
        if diagnostics.write_line(line).is_err() {
            break;
        }
    }
}
