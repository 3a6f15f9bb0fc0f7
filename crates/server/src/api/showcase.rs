//! # Showcase Stream
//!
//! SSE feed of the rotating testimonial window. Every subscriber gets its
//! own ticker, which stops when the client disconnects.

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{Stream, StreamExt};
use learning_center_core::showcase::{
    window, window_count, ShowcaseTicker, Testimonial, TESTIMONIALS, VISIBLE,
};
use serde::Serialize;
use std::convert::Infallible;
use tokio_stream::wrappers::WatchStream;
use utoipa::ToSchema;

use crate::app::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialResponse {
    pub name: String,
    pub avatar: String,
    pub text: String,
}

impl From<&Testimonial> for TestimonialResponse {
    fn from(t: &Testimonial) -> Self {
        Self {
            name: t.name.to_string(),
            avatar: t.avatar.to_string(),
            text: t.text.to_string(),
        }
    }
}

/// The testimonials visible at one showcase position
#[derive(Debug, Serialize, ToSchema)]
pub struct ShowcaseFrame {
    pub index: usize,
    pub testimonials: Vec<TestimonialResponse>,
}

impl ShowcaseFrame {
    pub fn at(index: usize) -> Self {
        Self {
            index,
            testimonials: window(TESTIMONIALS, index, VISIBLE)
                .iter()
                .map(TestimonialResponse::from)
                .collect(),
        }
    }
}

/// Stream showcase frames as the window advances
#[utoipa::path(
    get,
    path = "/api/v1/showcase/events",
    tag = "showcase",
    responses(
        (status = 200, description = "Server-sent `showcase` events", body = ShowcaseFrame, content_type = "text/event-stream")
    )
)]
pub async fn showcase_events(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let ticker = ShowcaseTicker::start(
        state.showcase_period,
        window_count(TESTIMONIALS.len(), VISIBLE),
    );
    let frames = WatchStream::new(ticker.subscribe());

    let stream = frames.map(move |index| {
        // Ties the ticker to the stream; dropping the stream stops it
        let _ticker = &ticker;
        let json = serde_json::to_string(&ShowcaseFrame::at(index)).unwrap_or_default();
        Ok(Event::default().event("showcase").data(json))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
