//! Route templates.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A route relative to the API base URL, e.g. `invoices/{id}/cancel`.
///
/// The template is also stored in request extensions, so middleware can log
/// the route pattern instead of the concrete URL.
///
/// # Example
///
/// ```
/// use payrest_core::PathTemplate;
///
/// const PAYMENT_REFUND: PathTemplate = PathTemplate::new("payments/{id}/refund");
///
/// assert_eq!(PAYMENT_REFUND.render(&["pay_29QQoUBi66xm2f"]).unwrap(), "payments/pay_29QQoUBi66xm2f/refund");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute the placeholders, left to right.
    ///
    /// Each value is percent-encoded as one path segment. Empty values and
    /// the dot segments `.` and `..` are rejected, since URL resolution would
    /// collapse them into another route. The number of values must match the
    /// placeholders.
    pub fn render(&self, values: &[&str]) -> Result<String> {
        let mut path = String::with_capacity(self.0.len());
        let mut values = values.iter();
        let mut rest = self.0;

        while let Some((head, tail)) = rest.split_once('{') {
            let Some((name, tail)) = tail.split_once('}') else {
                return Err(Error::invalid_request(format!(
                    "unclosed placeholder in `{}`",
                    self.0
                )));
            };
            let Some(value) = values.next() else {
                return Err(Error::invalid_request(format!(
                    "missing value for `{{{name}}}` in `{}`",
                    self.0
                )));
            };
            if matches!(*value, "" | "." | "..") {
                return Err(Error::invalid_request(format!(
                    "`{value}` is not a valid value for `{{{name}}}` in `{}`",
                    self.0
                )));
            }
            path.push_str(head);
            path.extend(utf8_percent_encode(value, SEGMENT));
            rest = tail;
        }
        path.push_str(rest);

        if values.next().is_some() {
            return Err(Error::invalid_request(format!(
                "too many values for `{}`",
                self.0
            )));
        }
        Ok(path)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn render_without_placeholders() {
        let template = PathTemplate::new("invoices");
        check!(template.render(&[]).ok().as_deref() == Some("invoices"));
    }

    #[test]
    fn render_in_order() {
        let template = PathTemplate::new("orders/{order_id}/payments/{payment_id}");
        check!(
            template.render(&["order_1", "pay_2"]).ok().as_deref()
                == Some("orders/order_1/payments/pay_2")
        );
    }

    #[test]
    fn render_encodes_segment() {
        let template = PathTemplate::new("invoices/{id}");
        check!(
            template.render(&["../payments?x=1"]).ok().as_deref()
                == Some("invoices/..%2Fpayments%3Fx=1")
        );
    }

    #[test]
    fn render_rejects_dot_and_empty_segments() {
        let template = PathTemplate::new("payments/{id}/refund");
        for value in ["", ".", ".."] {
            check!(
                matches!(template.render(&[value]), Err(Error::InvalidRequest(_))),
                "accepted {value:?}"
            );
        }
        check!(template.render(&["..."]).ok().as_deref() == Some("payments/.../refund"));
    }

    #[test]
    fn render_arity_mismatch() {
        let template = PathTemplate::new("invoices/{id}/cancel");
        check!(template.render(&[]).is_err());
        check!(template.render(&["a", "b"]).is_err());
    }

    #[test]
    fn path_template_as_ref() {
        let template = PathTemplate::new("invoices/{id}");
        let s: &str = template.as_ref();
        check!(s == "invoices/{id}");
        check!(template.to_string() == "invoices/{id}");
    }
}
