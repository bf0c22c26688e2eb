use contracts::domain::a002_user_sector::SubmissionRow;
use leptos::prelude::*;
use thaw::*;

/// Таблица отправленных записей с кнопкой редактирования
#[component]
pub fn SubmissionsTable(
    #[prop(into)] rows: Signal<Vec<SubmissionRow>>,
    #[prop(into)] editing_key: Signal<Option<usize>>,
    /// Кнопки "Edit" активны только когда форма свободна
    #[prop(into)]
    edit_enabled: Signal<bool>,
    on_edit: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || rows.with(|r| !r.is_empty())>
            <div class="table-wrapper" style="width: 100%; max-width: 720px;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Sectors"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        // Ключ включает данные записи, чтобы замена на месте перерисовала строку
                        <For
                            each=move || rows.get()
                            key=|row| (row.key, row.record.name.clone(), row.record.sectors.clone())
                            children=move |row| {
                                let key = row.key;
                                view! {
                                    <TableRow attr:class=move || {
                                        if editing_key.get() == Some(key) { "row--editing" } else { "" }
                                    }>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{row.record.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.record.sectors.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_edit.run(key)
                                                    disabled=Signal::derive(move || !edit_enabled.get())
                                                >
                                                    "Edit"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </Show>
    }
}
