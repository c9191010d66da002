//! Navigation targets and the routing seam.
//!
//! The UI layers describe destinations with [`UrlTarget`] and leave href
//! construction and history pushes to whatever implements [`UrlRouter`].

use async_trait::async_trait;

/// Destination this layer can point a link or a navigation at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlTarget {
	/// A document, by url id.
	Doc(String),
	/// The org's billing page.
	Billing,
	/// The public plans/pricing page.
	Plans,
}

/// Routing collaborator. Builds hrefs and performs in-app navigation.
#[async_trait]
pub trait UrlRouter: Send + Sync {
	/// Resolves a target to an href suitable for a link.
	fn make_url(&self, target: &UrlTarget) -> String;

	/// Navigates the app to the target.
	async fn push_url(&self, target: UrlTarget) -> anyhow::Result<()>;
}
