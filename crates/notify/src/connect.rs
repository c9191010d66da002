//! Connection-state presentation: the top-bar button and the dropdown
//! warning, as plain data.

/// Backend connectivity, ordered from healthy to given-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectState {
	#[default]
	Connected,
	/// Connection just dropped; a quick reconnect is likely.
	JustDisconnected,
	/// Still down after the first reconnect attempts.
	RecentlyDisconnected,
	/// Down long enough that a plain reconnect may not recover.
	ReallyDisconnected,
}

/// Tone a renderer should give the notifications button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
	#[default]
	Normal,
	/// Dimmed while the connection is interrupted.
	Muted,
	Error,
}

/// Caption and tone for the top-bar notifications button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusButton {
	pub label: &'static str,
	pub tone: Tone,
}

/// Connection warning pinned to the top of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectMsg {
	pub message: &'static str,
}

/// What the notifications button should say for a connection state.
pub fn status_button(state: ConnectState) -> StatusButton {
	match state {
		ConnectState::Connected => StatusButton {
			label: "Notifications",
			tone: Tone::Normal,
		},
		ConnectState::JustDisconnected => StatusButton {
			label: "Notifications",
			tone: Tone::Muted,
		},
		ConnectState::RecentlyDisconnected => StatusButton {
			label: "Offline",
			tone: Tone::Muted,
		},
		ConnectState::ReallyDisconnected => StatusButton {
			label: "Offline",
			tone: Tone::Error,
		},
	}
}

/// Dropdown warning for a connection state, if one applies.
pub fn disconnect_message(state: ConnectState) -> Option<DisconnectMsg> {
	let message = match state {
		ConnectState::Connected => return None,
		ConnectState::JustDisconnected => "Connection interrupted. Trying to reconnect...",
		ConnectState::RecentlyDisconnected => {
			"Not connected. Changes made now will be saved when the connection returns."
		}
		ConnectState::ReallyDisconnected => {
			"Offline for a while. Reload the page once your connection is back."
		}
	};
	Some(DisconnectMsg { message })
}
