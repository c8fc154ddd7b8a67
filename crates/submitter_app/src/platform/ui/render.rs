use submitter_core::AppViewModel;

/// Lines painted after every visible state change.
pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let submit = if view.submitted {
        "done"
    } else if view.can_submit {
        "available (type `submit`)"
    } else {
        "not available"
    };
    let destination = if view.has_destination {
        "configured"
    } else {
        "not configured (submission will fail)"
    };
    vec![
        format!("> {}", view.status_text),
        format!("  Name:   {}", view.user_name.as_deref().unwrap_or("(none)")),
        format!("  File:   {}", view.file_name.as_deref().unwrap_or("(none)")),
        format!("  Submit: {submit}"),
        format!("  Destination: {destination}"),
    ]
}

/// Shown when `submit` is typed while the control is disabled.
pub(crate) fn submit_unavailable(view: &AppViewModel) -> String {
    if view.submitted {
        "Your file has already been submitted.".to_string()
    } else {
        format!("Cannot submit yet: {}", view.status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> AppViewModel {
        AppViewModel {
            status_text: "Ready To Submit.".into(),
            user_name: Some("Alice".into()),
            file_name: Some("hw1.py".into()),
            has_destination: true,
            ready_to_submit: true,
            submitted: false,
            can_submit: true,
        }
    }

    #[test]
    fn renders_status_first() {
        let lines = render(&view());
        assert_eq!(lines[0], "> Ready To Submit.");
        assert_eq!(lines[1], "  Name:   Alice");
        assert_eq!(lines[3], "  Submit: available (type `submit`)");
        assert_eq!(lines[4], "  Destination: configured");
    }

    #[test]
    fn missing_fields_show_placeholder() {
        let lines = render(&AppViewModel::default());
        assert_eq!(lines[1], "  Name:   (none)");
        assert_eq!(lines[2], "  File:   (none)");
        assert_eq!(lines[3], "  Submit: not available");
        assert_eq!(lines[4], "  Destination: not configured (submission will fail)");
    }

    #[test]
    fn submitted_view_explains_refusal() {
        let mut view = view();
        view.submitted = true;
        view.can_submit = false;
        assert_eq!(render(&view)[3], "  Submit: done");
        assert_eq!(submit_unavailable(&view), "Your file has already been submitted.");
    }
}
