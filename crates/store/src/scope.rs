/// Top-level namespace a lookup is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope<'a> {
	/// The default namespace shared by every caller.
	Global,
	/// The namespace owned by one session.
	Session(&'a str),
}

impl Scope<'_> {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Global => "global",
			Self::Session(_) => "session",
		}
	}
}

