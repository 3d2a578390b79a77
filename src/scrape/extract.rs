use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::scrape::normalize::{normalize_date, parse_time, today};
use crate::scrape::types::Event;

// candidate container patterns, tried in priority order
const CANDIDATE_SELECTORS: [&str; 7] = [
    "table tr",
    ".event",
    ".calendar-event",
    r#"div[class*="event"]"#,
    "article",
    ".course",
    ".schedule-item",
];

const TITLE_SELECTOR: &str = "h1, h2, h3, h4, .title, .summary, strong";
const DATE_SELECTOR: &str = ".date, time, [datetime]";
const TIME_SELECTOR: &str = ".time, .hours";
const LOCATION_SELECTOR: &str = ".location, .venue, .place";
const DESCRIPTION_SELECTOR: &str = ".description, .details, .info";

/// Extract event-like records from raw HTML.
///
/// Runs the candidate selector cascade over the parsed document and keeps
/// every element with a non-empty title and at least one temporal field.
/// Elements reached by more than one pattern are emitted once, on the first
/// pattern that matched them.
pub fn extract_events(html: &str) -> Vec<Event> {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut events = Vec::new();

    for sel_str in CANDIDATE_SELECTORS {
        let Ok(sel) = Selector::parse(sel_str) else {
            continue;
        };
        let mut matched = 0usize;
        for element in doc.select(&sel) {
            matched += 1;
            if !seen.insert(element.id()) {
                continue;
            }
            if let Some(event) = extract_one(&element) {
                events.push(event);
            }
        }
        debug!(selector = sel_str, matched, "candidate selector pass");
    }

    events
}

fn extract_one(element: &ElementRef) -> Option<Event> {
    let title = first_text(element, TITLE_SELECTOR)?;

    let date = first_text(element, DATE_SELECTOR).or_else(|| {
        element
            .value()
            .attr("data-date")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    });
    let time = first_text(element, TIME_SELECTOR);

    // only elements with both a title and a temporal field count as events
    if date.is_none() && time.is_none() {
        return None;
    }

    let location = first_text(element, LOCATION_SELECTOR);
    let description = first_text(element, DESCRIPTION_SELECTOR);

    let date = match date {
        Some(raw) => normalize_date(&raw),
        None => today(),
    };
    let (start_time, end_time) = match time {
        Some(raw) => parse_time(&raw),
        None => (None, None),
    };

    Some(Event {
        title,
        date,
        description,
        location,
        start_time,
        end_time,
    })
}

// Trimmed text of the first descendant matching the grouped selectors, in
// document order. The first match wins even when its text is blank; a blank
// first match makes the field absent.
fn first_text(element: &ElementRef, selectors: &str) -> Option<String> {
    let sel = Selector::parse(selectors).ok()?;
    let node = element.select(&sel).next()?;
    let text = node.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_with_title_and_date() {
        let html = r#"
        <html><body>
          <article>
            <h2>Spring Fair</h2>
            <span class="date">03/21/2024</span>
          </article>
        </body></html>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.title, "Spring Fair");
        assert_eq!(event.date, "2024-03-21");
        assert_eq!(event.description, None);
        assert_eq!(event.location, None);
        assert_eq!(event.start_time, None);
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn title_without_any_temporal_field_is_dropped() {
        let html = r#"<article><h2>Untitled talk</h2><p>no date, no time</p></article>"#;
        assert!(extract_events(html).is_empty());
    }

    #[test]
    fn temporal_field_without_title_is_dropped() {
        let html = r#"<div class="event"><span class="date">2024-01-01</span></div>"#;
        assert!(extract_events(html).is_empty());
    }

    #[test]
    fn data_date_attribute_is_a_date_fallback() {
        let html = r#"
        <div class="event" data-date="2024-05-01">
          <h3>Open day</h3>
        </div>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, "2024-05-01");
    }

    #[test]
    fn element_matching_several_patterns_is_emitted_once() {
        // matches ".event" and `div[class*="event"]`
        let html = r#"
        <div class="event">
          <h3>Lecture</h3>
          <span class="date">2024-02-02</span>
        </div>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn time_only_event_defaults_date_to_today() {
        let html = r#"
        <div class="schedule-item">
          <strong>Morning run</strong>
          <span class="time">6:30 AM - 7:15 AM</span>
        </div>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, today());
        assert_eq!(events[0].start_time.as_deref(), Some("06:30"));
        assert_eq!(events[0].end_time.as_deref(), Some("07:15"));
    }

    #[test]
    fn table_rows_are_candidates() {
        let html = r#"
        <table>
          <tr>
            <td><strong>Board meeting</strong></td>
            <td class="date">2024-06-10</td>
          </tr>
          <tr>
            <td>no title markup here</td>
            <td class="date">2024-06-11</td>
          </tr>
        </table>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Board meeting");
        assert_eq!(events[0].date, "2024-06-10");
    }

    #[test]
    fn location_and_description_are_picked_up() {
        let html = r#"
        <article>
          <h1>Jazz night</h1>
          <time datetime="2024-07-04">July 4th, 2024</time>
          <span class="venue">Blue Note</span>
          <p class="details">Quartet, doors at eight.</p>
        </article>"#;
        let events = extract_events(html);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, "2024-07-04");
        assert_eq!(events[0].location.as_deref(), Some("Blue Note"));
        assert_eq!(
            events[0].description.as_deref(),
            Some("Quartet, doors at eight.")
        );
    }

    #[test]
    fn blank_first_title_match_drops_the_candidate() {
        // field lookup is positional: the whitespace-only h2 is the first
        // title match, so the later .title never gets a look
        let html = r#"
        <article>
          <h2>   </h2>
          <span class="title">Hidden title</span>
          <span class="date">2024-01-05</span>
        </article>"#;
        assert!(extract_events(html).is_empty());
    }

    #[test]
    fn malformed_html_yields_no_events() {
        assert!(extract_events("<<<not really html>>>").is_empty());
        assert!(extract_events("").is_empty());
    }
}
