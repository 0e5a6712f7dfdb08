use std::error::Error as StdError;

use faultline::{
    Category, Cause, Defect, RemoteCause, ResponsibilityError, TypeArgumentError,
    UnreachableError, categorize, render_chain,
};

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn every_kind_is_send_sync() {
    assert_send_sync::<UnreachableError>();
    assert_send_sync::<ResponsibilityError>();
    assert_send_sync::<TypeArgumentError>();
    assert_send_sync::<RemoteCause>();
}

#[test]
fn defaults_are_non_empty_and_per_kind() {
    assert_eq!(
        UnreachableError::new().message(),
        UnreachableError::DEFAULT_MESSAGE
    );
    assert_eq!(
        ResponsibilityError::new().message(),
        ResponsibilityError::DEFAULT_MESSAGE
    );
    assert_eq!(
        TypeArgumentError::new().message(),
        TypeArgumentError::DEFAULT_MESSAGE
    );

    let defaults = [
        UnreachableError::DEFAULT_MESSAGE,
        ResponsibilityError::DEFAULT_MESSAGE,
        TypeArgumentError::DEFAULT_MESSAGE,
    ];
    for default in defaults {
        assert!(!default.is_empty());
    }
    // The kinds are siblings, not aliases; their defaults differ.
    assert_ne!(defaults[0], defaults[1]);
    assert_ne!(defaults[1], defaults[2]);
    assert_ne!(defaults[0], defaults[2]);
}

#[test]
fn messages_pass_through_unaltered_for_every_kind() {
    for message in ["plain", "", "x=3 unexpected", "  padded  "] {
        assert_eq!(UnreachableError::with_message(message).message(), message);
        assert_eq!(ResponsibilityError::with_message(message).message(), message);
        assert_eq!(TypeArgumentError::with_message(message).message(), message);
    }
}

#[test]
fn causes_are_retrievable_through_source_for_every_kind() {
    let errs: Vec<Box<dyn StdError>> = vec![
        Box::new(UnreachableError::with_cause(
            "outer",
            std::io::Error::other("inner"),
        )),
        Box::new(ResponsibilityError::with_cause(
            "outer",
            std::io::Error::other("inner"),
        )),
        Box::new(TypeArgumentError::with_cause(
            "outer",
            std::io::Error::other("inner"),
        )),
    ];
    for err in &errs {
        assert_eq!(err.to_string(), "outer");
        assert_eq!(err.source().expect("cause present").to_string(), "inner");
        assert_eq!(render_chain(err.as_ref()), "outer: inner");
    }
}

#[test]
fn specific_catch_does_not_match_sibling_kinds() {
    let err: Box<dyn StdError + Send + Sync> = Box::new(TypeArgumentError::new());
    assert!(err.downcast_ref::<TypeArgumentError>().is_some());
    assert!(err.downcast_ref::<UnreachableError>().is_none());
    assert!(err.downcast_ref::<ResponsibilityError>().is_none());
}

#[test]
fn generic_catch_matches_by_category() {
    let errs: Vec<(Box<dyn StdError + Send + Sync>, Category)> = vec![
        (Box::new(UnreachableError::new()), Category::InvalidOperation),
        (
            Box::new(ResponsibilityError::new()),
            Category::NotImplemented,
        ),
        (Box::new(TypeArgumentError::new()), Category::InvalidArgument),
    ];
    for (err, expected) in &errs {
        assert_eq!(categorize(err.as_ref()), Some(*expected));
    }

    // A foreign error never matches the taxonomy, even with a similar text.
    let foreign: Box<dyn StdError + Send + Sync> =
        Box::new(std::io::Error::other("an invalid type argument was specified"));
    assert_eq!(categorize(foreign.as_ref()), None);
}

#[test]
fn defect_trait_exposes_shared_capability_set() {
    let defects: Vec<Box<dyn Defect>> = vec![
        Box::new(UnreachableError::with_message("a")),
        Box::new(ResponsibilityError::with_message("b")),
        Box::new(TypeArgumentError::with_message("c")),
    ];
    let seen: Vec<(Category, String)> = defects
        .iter()
        .map(|defect| (defect.category(), defect.message().to_owned()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Category::InvalidOperation, "a".to_owned()),
            (Category::NotImplemented, "b".to_owned()),
            (Category::InvalidArgument, "c".to_owned()),
        ]
    );
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Init,
    Running,
    Done,
}

// Simulated exhaustive dispatch: the author believes `Done` can never be
// observed here, so that arm raises instead of handling.
fn advance(phase: Phase) -> Result<Phase, Cause> {
    match phase {
        Phase::Init => Ok(Phase::Running),
        Phase::Running => Ok(Phase::Done),
        Phase::Done => Err(Box::new(UnreachableError::with_message("x=3 unexpected"))),
    }
}

#[test]
fn unreachable_arm_surfaces_through_generic_invalid_operation_handler() {
    let err = advance(Phase::Done).unwrap_err();

    // Handler typed to the generic category still matches the specialization.
    assert_eq!(categorize(err.as_ref()), Some(Category::InvalidOperation));

    // And the handled instance is still the concrete kind with its message.
    let handled = err
        .downcast_ref::<UnreachableError>()
        .expect("concrete kind survives category handling");
    assert_eq!(handled.message(), "x=3 unexpected");
}

#[test]
fn type_argument_report_carries_slot_and_chain() {
    let err = TypeArgumentError::for_param_with_cause(
        "TState must be a unit-only enum",
        "TState",
        std::io::Error::other("variant Payload(u32) carries data"),
    );

    // What a top-level reporter would log.
    assert_eq!(
        render_chain(&err),
        "TState must be a unit-only enum: variant Payload(u32) carries data"
    );
    assert_eq!(err.type_param(), Some("TState"));

    // The same report survives a process boundary.
    let wire = serde_json::to_string(&err).unwrap();
    let restored: TypeArgumentError = serde_json::from_str(&wire).unwrap();
    assert_eq!(restored.type_param(), Some("TState"));
    assert_eq!(
        render_chain(&restored),
        "TState must be a unit-only enum: variant Payload(u32) carries data"
    );
}
