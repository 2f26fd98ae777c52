use tracing::Span;

/// Build the root span for one invocation of a function. Every log line emitted while handling
/// the event should happen inside this span so that it carries the Lambda request ID.
///
/// `message_id` and `movie_count` start empty and are recorded once they are known.
pub fn invocation_span(function: &'static str, request_id: &str) -> Span {
    use tracing::field::Empty;

    tracing::info_span!(
        "invocation",
        function = function,
        request_id = request_id,
        message_id = Empty,
        movie_count = Empty
    )
}
