//! The five-row quote table.

use qu_core::Quote;

use crate::format::{int_to_human, py_float, round_to};
use crate::layout::outline;
use crate::style::{PLACEHOLDER, Styled, Tone, color_bias, color_pct_trigger};

fn held_pct(label: &str, fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => format!("{label}: {:>4}%", py_float(round_to(f * 100.0, 1))),
        None => format!("{label}:   N/A"),
    }
}

fn truthy(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0)
}

/// Render the quote table. `volume` and `average_volume` must be present.
pub(crate) fn render(q: &Quote, volume: u64, average_volume: u64) -> Option<String> {
    let vol_pct = color_pct_trigger(volume as f64, average_volume as f64, Tone::Great, Tone::Warn);
    let row1 = vec![
        format!("AveVol: {average_volume}"),
        format!("Volume: {volume:>8}"),
        format!("VolPct: {vol_pct}"),
        format!("Outstanding: {:>5}", int_to_human(q.shares_outstanding)),
    ];

    let open_dif = q
        .open
        .map_or_else(Styled::placeholder, |o| color_bias(py_float(round_to(o - q.previous_close, 4))));
    let row2 = vec![
        match q.open {
            Some(o) => format!("Open: {:>10.2}", round_to(o, 5)),
            None => format!("Open: {PLACEHOLDER:>10}"),
        },
        format!("PrevClose: {:>5}", py_float(q.previous_close)),
        format!("OpenDif: {open_dif:>14}"),
        format!("Float Share: {:>5}", int_to_human(q.float_shares)),
    ];

    let range = q
        .day_high
        .zip(q.day_low)
        .map(|(h, l)| round_to(h - round_to(l, 2), 4));
    let row3 = vec![
        match q.day_high {
            Some(h) => format!("High: {h:>10.2}"),
            None => format!("High: {PLACEHOLDER:>10}"),
        },
        match q.day_low {
            Some(l) => format!("Low: {:>11.2}", round_to(l, 2)),
            None => format!("Low: {PLACEHOLDER:>11}"),
        },
        match range {
            Some(d) => format!("Diff: {d:>8.2}"),
            None => format!("Diff: {PLACEHOLDER:>8}"),
        },
        held_pct("Insider Pct", q.held_percent_insiders),
    ];

    let mut row4 = match truthy(q.bid).zip(truthy(q.ask)) {
        Some((bid, ask)) => vec![
            format!("Bid: {bid:>11.2}"),
            format!("Ask: {:>11}", py_float(ask)),
            format!("Spread: {:>6.2}", round_to(ask - bid, 4)),
        ],
        None => vec![PLACEHOLDER.to_string(); 3],
    };
    row4.push(held_pct("Institu Pct", q.held_percent_institutions));

    let mut row5 = match q.bid_size.filter(|s| *s != 0).zip(q.ask_size.filter(|s| *s != 0)) {
        Some((b, a)) => vec![format!("BidSize: {b:>7}"), format!("AskSize: {a:>7}")],
        None => vec![PLACEHOLDER.to_string(); 2],
    };
    row5.push(match truthy(q.beta) {
        Some(b) => format!("Beta:  {:>7.2}", round_to(b, 4)),
        None => "Beta:     N/A".to_string(),
    });
    row5.push(if q.options_count > 0 {
        format!("Options: {:>16}", color_bias(q.options_count))
    } else {
        String::new()
    });

    outline(&[row1, row2, row3, row4, row5])
}
