//! Tab management module
//!
//! - `page` - обёртка контента таба (заголовок, подзаголовок, видимость)
//! - `registry` - tab.key → View через реестр маршрутов
//! - `screens` - ленивое разрешение экранов по `ScreenKey`

pub mod page;
pub mod registry;
pub mod screens;

pub use page::TabPage;
