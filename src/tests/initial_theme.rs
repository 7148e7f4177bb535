#[cfg(test)]
mod tests {
    use crate::configs::{ theme_label_from, InitialTheme };
    use crate::tests::common::mocks::BlockedThemeStore;
    use crate::tests::common::setup;
    use crate::utils::{ MemoryThemeStore, MenuState, Theme, ThemeStore };

    #[test]
    fn test_stored_label_seeds_the_menu() {
        setup();
        let store = MemoryThemeStore::with_value("white");
        let label = theme_label_from(&store);
        assert_eq!(label.as_deref(), Some("white"));
        assert_eq!(MenuState::new(Theme::from_config(label.as_deref())).theme, Theme::Light);
    }

    #[test]
    fn test_last_write_wins_on_next_boot() {
        let store = MemoryThemeStore::with_value("white");
        store.persist(Theme::Dark).unwrap();
        assert_eq!(theme_label_from(&store).as_deref(), Some("black"));
    }

    #[test]
    fn test_unreadable_or_missing_cookie_boots_dark() {
        setup();
        assert_eq!(theme_label_from(&BlockedThemeStore::default()), None);
        assert_eq!(theme_label_from(&MemoryThemeStore::default()), None);
        assert_eq!(Theme::from_config(None), Theme::Dark);
    }

    #[test]
    fn test_garbage_label_boots_dark() {
        let store = MemoryThemeStore::with_value("purple");
        let label = theme_label_from(&store);
        assert_eq!(Theme::from_config(label.as_deref()), Theme::Dark);
    }

    #[test]
    fn test_boot_store_is_the_one_the_menu_writes_to() {
        setup();
        let initial = InitialTheme::from_store(MemoryThemeStore::with_value("white"));
        assert_eq!(initial.label.as_deref(), Some("white"));

        let menu_side = initial.clone().store;
        menu_side.persist(Theme::Dark).unwrap();

        assert_eq!(initial.store.writes(), vec![Theme::Dark]);
        assert_eq!(theme_label_from(&initial.store).as_deref(), Some("black"));
    }
}
