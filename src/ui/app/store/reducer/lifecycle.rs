use crate::ui::app::state::AppLifecycle;
use crate::ui::app::store::action::LifecycleAction;

pub fn reduce(lifecycle: &mut AppLifecycle, action: LifecycleAction) {
    *lifecycle = match action {
        LifecycleAction::DidBecomeActive => AppLifecycle::ForegroundActive,
        LifecycleAction::WillResignActive | LifecycleAction::WillEnterForeground => {
            AppLifecycle::ForegroundInactive
        }
        LifecycleAction::DidEnterBackground => AppLifecycle::BackgroundActive,
        LifecycleAction::WillTerminate => AppLifecycle::BackgroundInactive,
    };
}
