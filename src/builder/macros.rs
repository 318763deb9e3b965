//! Macros for ergonomic transition tables.

/// Build a `TransitionTable` from nested rows.
///
/// # Example
///
/// ```
/// use dfa_core::transitions;
///
/// let table = transitions! {
///     "even" => { '0' => "odd", '1' => "even" },
///     "odd" => { '0' => "even", '1' => "odd" },
/// };
///
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.get(&"odd", &'0'), Some(&"even"));
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:expr => { $( $on:expr => $to:expr ),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::TransitionTable::new();
        $(
            {
                #[allow(unused_variables)]
                let from = $from;
                $( table.insert(::std::clone::Clone::clone(&from), $on, $to); )*
            }
        )*
        table
    }};
}
