#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// `seq![a, b, c]` is `grammar::seq(vec![a, b, c])`.
#[macro_export]
macro_rules! seq {
    ($($pat:expr),* $(,)?) => {
        $crate::grammar::seq(vec![ $($pat),* ])
    };
}

/// `alt![a, b, c]` is `grammar::alt(vec![a, b, c])`; earlier branches win.
#[macro_export]
macro_rules! alt {
    ($($pat:expr),* $(,)?) => {
        $crate::grammar::alt(vec![ $($pat),* ])
    };
}

/// Build a [`LocaleProfile`](crate::LocaleProfile) from a table of rules.
///
/// ```ignore
/// profile! {
///     id: "US",
///     rules: [
///         STREET_NUMBER => street_number(),
///         CITY => city(21),
///     ],
///     phrases: NUMBER_WORDS,
///     gate: BucketMask::HAS_DIGITS,
/// }
/// ```
#[macro_export]
macro_rules! profile {
    (
        id: $id:expr,
        rules: [ $($name:expr => $rule:expr),* $(,)? ]
        $(, phrases: $phrases:expr)?
        $(, gate: $gate:expr)?
        $(,)?
    ) => {{
        $crate::LocaleProfile::builder($id)
            $(.rule($name, $rule))*
            $(.trigger_phrases($phrases))?
            $(.gate($gate))?
            .build()
    }};
}
