use leptos::*;
use leptos_router::*;

use crate::api::AuthState;
use crate::components::navbar::Navbar;
use crate::components::toast::{provide_toaster, ToastViewport};
use crate::pages::{
    draws::DrawsPage, feed::ResultsFeed, games::GamesPage, login::Login, results::ResultsPage,
    signup::Signup,
};
use crate::query::provide_query_client;

#[component]
pub fn App() -> impl IntoView {
    let auth_state = AuthState::new();
    provide_context(auth_state.clone());
    provide_query_client();
    provide_toaster();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ResultsFeed />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />
                    <Route path="/admin" view=AuthenticatedLayout>
                        <Route path="" view=GamesPage />
                        <Route path="games" view=GamesPage />
                        <Route path="draws" view=DrawsPage />
                        <Route path="results" view=ResultsPage />
                    </Route>
                </Routes>
            </main>
            <ToastViewport />
        </Router>
    }
}

#[component]
fn AuthenticatedLayout() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();

    view! {
        <Show
            when=move || auth_state.is_authenticated()
            fallback=|| view! { <RedirectToLogin /> }
        >
            <Navbar />
            <div class="container">
                <Outlet />
            </div>
        </Show>
    }
}

#[component]
fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();
    navigate("/login", Default::default());
    view! {}
}
