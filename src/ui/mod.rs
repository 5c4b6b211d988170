pub mod dialogs;
pub mod result_view;
pub mod task_form;
pub mod task_list;
pub mod theme;
pub mod toolbar;
