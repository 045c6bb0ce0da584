//! Tick evaluation for the live stopwatch display.
//!
//! This module defines the pure per-tick decision: what text to show, which
//! style to render it in, and whether the one-time notification is due. The
//! caller owns the notification latch; evaluation only reports when the
//! threshold is first crossed.

/// Elapsed seconds at which the display switches to the overdue style (9h).
pub const OVERDUE_THRESHOLD_SECS: i64 = 9 * 3600;

/// Elapsed seconds at which the one-time notification fires (9.5h).
pub const NOTIFY_THRESHOLD_SECS: i64 = 34_200;

/// Message carried by the one-time notification.
pub const NOTIFY_MESSAGE: &str =
    "You have exceeded 9:30 hours. Please remember to clock out!";

/// Visual style for the stopwatch display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStyle {
    /// Normal rendering
    Default,
    /// Warning rendering, applied at and above the overdue threshold
    Overdue,
}

/// Result of evaluating one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickDecision {
    /// Display text, always `HH:MM:SS` with unbounded hours
    pub text: String,
    /// Style to render the text in
    pub style: TimerStyle,
    /// True when the notification threshold was crossed for the first time
    pub notify: bool,
}

/// Format an elapsed duration in seconds as zero-padded `HH:MM:SS`.
///
/// Hours are unbounded (no wrap at 24). Negative input clamps to `00:00:00`.
///
/// # Example
/// ```
/// use attendance_clock::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(34_199), "09:29:59");
/// assert_eq!(format_elapsed(90 * 3600), "90:00:00");
/// assert_eq!(format_elapsed(-5), "00:00:00");
/// ```
pub fn format_elapsed(total_seconds: i64) -> String {
    if total_seconds < 0 {
        return "00:00:00".to_string();
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Evaluate one tick of the stopwatch.
///
/// # Arguments
/// * `elapsed_secs` - Signed seconds since clock-in; negative means clock skew
/// * `already_notified` - Whether the one-time notification has fired before
///
/// # Returns
/// A [`TickDecision`] with the display text, style, and whether the caller
/// should emit the notification now (and latch its flag).
///
/// Negative elapsed time is not an error: the decision is a plain zero
/// display in the default style.
pub fn evaluate_tick(elapsed_secs: i64, already_notified: bool) -> TickDecision {
    if elapsed_secs < 0 {
        return TickDecision {
            text: "00:00:00".to_string(),
            style: TimerStyle::Default,
            notify: false,
        };
    }

    let style = if elapsed_secs >= OVERDUE_THRESHOLD_SECS {
        TimerStyle::Overdue
    } else {
        TimerStyle::Default
    };

    TickDecision {
        text: format_elapsed(elapsed_secs),
        style,
        notify: elapsed_secs >= NOTIFY_THRESHOLD_SECS && !already_notified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_zero_padding() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(1), "00:00:01");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(3661), "01:01:01");
    }

    #[test]
    fn test_format_elapsed_hours_unbounded() {
        assert_eq!(format_elapsed(24 * 3600), "24:00:00");
        assert_eq!(format_elapsed(100 * 3600 + 59 * 60 + 59), "100:59:59");
    }

    #[test]
    fn test_format_elapsed_negative_clamps() {
        assert_eq!(format_elapsed(-1), "00:00:00");
        assert_eq!(format_elapsed(i64::MIN), "00:00:00");
    }

    #[test]
    fn test_style_below_threshold() {
        let decision = evaluate_tick(OVERDUE_THRESHOLD_SECS - 1, false);
        assert_eq!(decision.style, TimerStyle::Default);
        assert_eq!(decision.text, "08:59:59");
    }

    #[test]
    fn test_style_at_threshold() {
        let decision = evaluate_tick(OVERDUE_THRESHOLD_SECS, false);
        assert_eq!(decision.style, TimerStyle::Overdue);
        assert_eq!(decision.text, "09:00:00");
    }

    #[test]
    fn test_notify_at_threshold_only_when_not_latched() {
        let decision = evaluate_tick(NOTIFY_THRESHOLD_SECS, false);
        assert!(decision.notify);

        let decision = evaluate_tick(NOTIFY_THRESHOLD_SECS, true);
        assert!(!decision.notify);
    }

    #[test]
    fn test_notify_below_threshold() {
        let decision = evaluate_tick(NOTIFY_THRESHOLD_SECS - 1, false);
        assert!(!decision.notify);
        // 9:29:59 is already past 9h, so the style is overdue
        assert_eq!(decision.style, TimerStyle::Overdue);
        assert_eq!(decision.text, "09:29:59");
    }

    #[test]
    fn test_negative_elapsed_renders_zero() {
        let decision = evaluate_tick(-120, false);
        assert_eq!(decision.text, "00:00:00");
        assert_eq!(decision.style, TimerStyle::Default);
        assert!(!decision.notify);
    }

    #[test]
    fn test_negative_elapsed_never_notifies() {
        // Even with the latch unset, skewed clocks never trigger the alert
        let decision = evaluate_tick(i64::MIN, false);
        assert!(!decision.notify);
    }
}
