use super::*;
use crate::state::auth::UserProfile;

#[test]
fn screen_for_maps_each_view_state() {
    assert_eq!(screen_for(&ViewState::Loading), Screen::Loading);
    assert_eq!(screen_for(&ViewState::Unauthenticated), Screen::SignIn);
    let view = ViewState::Authenticated { profile: UserProfile::bare("alice".into()), tokens: None };
    assert_eq!(screen_for(&view), Screen::Profile);
}
