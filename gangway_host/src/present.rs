use gangway_engine::{LoadState, ModuleReference};
use tracing::error;

/// Shown for a failed load. Not customizable by the caller.
pub const ERROR_INDICATOR: &str = "ERROR!";

/// What the host should draw for the current load state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View<R> {
    /// Nothing to draw: no fallback was configured, or the state was unset.
    Empty,

    /// The caller's fallback content, unchanged.
    Fallback(R),

    /// The fixed error indicator (see [`ERROR_INDICATOR`]).
    ErrorIndicator,

    /// The output of the caller's render function.
    Rendered(R),
}

/// A suspending boundary around the presented content.
///
/// The boundary carries a copy of the fallback so the host can display it
/// for any suspension the rendered content itself triggers, for example
/// further lazy content inside the rendered body. This layers above the
/// load state: a suspended `Rendered` body falls back without disturbing
/// the load session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boundary<R> {
    pub fallback: Option<R>,
    pub body: View<R>,
}

/// Maps the current load state to drawable content.
///
/// `state` is `None` when the caller has not yet received an initial state
/// notification; this degrades to empty content with a diagnostic rather
/// than a panic.
pub fn present<C, R: Clone>(
    reference: &ModuleReference,
    state: Option<&LoadState<C>>,
    fallback: Option<&R>,
    render: impl FnOnce(&C) -> R,
) -> Boundary<R> {
    let body = match state {
        None => {
            error!(
                "Lazy component \"{}\" has no load state at presentation time.",
                reference
            );
            View::Empty
        }
        Some(LoadState::Idle) | Some(LoadState::Loading) => match fallback {
            Some(fallback) => View::Fallback(fallback.clone()),
            None => View::Empty,
        },
        Some(LoadState::Failed) => View::ErrorIndicator,
        Some(LoadState::Resolved(component)) => View::Rendered(render(component)),
    };

    Boundary {
        fallback: fallback.cloned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_test_utils::mr;

    fn render(component: &&str) -> String {
        format!("rendered {}", component)
    }

    #[test]
    fn it_should_return_the_fallback_while_idle_or_loading() {
        let reference = mr("shell", "header");
        let fallback = "spinner".to_string();

        for state in [LoadState::<&str>::Idle, LoadState::<&str>::Loading] {
            let boundary = present(&reference, Some(&state), Some(&fallback), render);

            assert_eq!(boundary.body, View::Fallback("spinner".to_string()));
            assert_eq!(boundary.fallback, Some("spinner".to_string()));
        }
    }

    #[test]
    fn it_should_return_empty_content_while_loading_without_a_fallback() {
        let reference = mr("shell", "header");

        let boundary = present(&reference, Some(&LoadState::<&str>::Loading), None, render);

        assert_eq!(boundary.body, View::Empty);
        assert_eq!(boundary.fallback, None);
    }

    #[test]
    fn it_should_render_the_resolved_component() {
        let reference = mr("shell", "header");
        let fallback = "spinner".to_string();

        let boundary = present(
            &reference,
            Some(&LoadState::Resolved("header-component")),
            Some(&fallback),
            render,
        );

        assert_eq!(
            boundary.body,
            View::Rendered("rendered header-component".to_string())
        );
        // The fallback is still carried for suspensions inside the rendered
        // content.
        assert_eq!(boundary.fallback, Some("spinner".to_string()));
    }

    #[test]
    fn it_should_return_the_error_indicator_on_failure() {
        let reference = mr("shell", "header");

        let boundary = present(
            &reference,
            Some(&LoadState::<&str>::Failed),
            Some(&"spinner".to_string()),
            render,
        );

        assert_eq!(boundary.body, View::ErrorIndicator);
    }

    #[test]
    fn it_should_degrade_to_empty_content_when_the_state_is_unset() {
        let reference = mr("shell", "header");

        let boundary = present(
            &reference,
            None::<&LoadState<&str>>,
            Some(&"spinner".to_string()),
            render,
        );

        assert_eq!(boundary.body, View::Empty);
    }
}
