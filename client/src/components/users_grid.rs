//! Table of profiles: name, email, join date, and role badge.

use leptos::prelude::*;

use crate::net::types::{Profile, ProfileStatus};
use crate::util::format::format_date;

fn status_badge_class(status: ProfileStatus) -> &'static str {
    match status {
        ProfileStatus::User => "status-column status-column--user",
        _ => "status-column status-column--other",
    }
}

#[component]
pub fn UsersGrid(users: Vec<Profile>) -> impl IntoView {
    view! {
        <table class="users-grid">
            <thead>
                <tr>
                    <th class="users-grid__name">"Name"</th>
                    <th>"Email Address"</th>
                    <th>"Date Joined"</th>
                    <th>"Type"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let joined = user.joined_at.as_deref().map(format_date).unwrap_or_default();
                        let avatar = user.avatar_url().to_owned();
                        view! {
                            <tr>
                                <td>
                                    <div class="flex items-center gap-1.5 px-4">
                                        <img
                                            src=avatar
                                            alt="user"
                                            class="rounded-full size-8 aspect-square"
                                            referrerpolicy="no-referrer"
                                        />
                                        <span>{user.name}</span>
                                    </div>
                                </td>
                                <td>{user.email}</td>
                                <td>{joined}</td>
                                <td>
                                    <article class=status_badge_class(user.status)>
                                        <div></div>
                                        <h3>{user.status.as_str()}</h3>
                                    </article>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
