//! Users grid page with paging.

use leptos::prelude::*;

use crate::components::banner::{EmptyState, ErrorBanner};
use crate::components::header::Header;
use crate::components::pager::Pager;
use crate::components::skeletons::UsersGridSkeleton;
use crate::components::users_grid::UsersGrid;
use crate::constants::USERS_PAGE_SIZE;
use crate::net::types::UsersPage;
use crate::state::auth::AuthState;
use crate::state::loader::Loadable;

#[component]
pub fn AllUsersPage() -> impl IntoView {
    let page = RwSignal::new(0_u32);
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(Loadable::<UsersPage>::Loading);

    Effect::new(move || {
        let offset = crate::util::paging::page_offset(page.get(), USERS_PAGE_SIZE);
        users.set(Loadable::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users(USERS_PAGE_SIZE, offset).await;
            users.set(Loadable::from_result(crate::util::auth::track_session(auth, result)));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (offset, auth);
    });

    let total = Signal::derive(move || users.with(|u| u.ready().map_or(0, |p| p.total)));

    view! {
        <main class="all-users wrapper">
            <Header
                title="Manage Users".to_owned()
                description="Filter, sort, and access detailed user profiles"
            />
            {move || match users.get() {
                Loadable::Loading => view! { <UsersGridSkeleton/> }.into_any(),
                Loadable::Failed(message) => {
                    view! { <ErrorBanner message=format!("Error loading users: {message}")/> }.into_any()
                }
                Loadable::Ready(data) if data.users.is_empty() => {
                    view! { <EmptyState message="No users found in the database."/> }.into_any()
                }
                Loadable::Ready(data) => view! { <UsersGrid users=data.users/> }.into_any(),
            }}
            <Pager page=page total=total page_size=USERS_PAGE_SIZE/>
        </main>
    }
}
