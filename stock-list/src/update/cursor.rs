use crate::{message::CursorDirection, model::InventoryList};

pub fn update_by_direction(
    list: &mut InventoryList,
    len: usize,
    count: &usize,
    direction: &CursorDirection,
) {
    if len == 0 {
        list.cursor = 0;
        return;
    }

    let max = len - 1;
    list.cursor = match direction {
        CursorDirection::Bottom => max,
        CursorDirection::Down => list.cursor.saturating_add(*count).min(max),
        CursorDirection::Top => 0,
        CursorDirection::Up => list.cursor.saturating_sub(*count),
    };
}

pub fn validate(list: &mut InventoryList, len: usize) {
    let max = len.saturating_sub(1);
    if list.cursor > max {
        list.cursor = max;
    }

    list.view_port.update_by_cursor(list.cursor);
}

#[cfg(test)]
mod test {
    use crate::{message::CursorDirection, model::InventoryList};

    use super::{update_by_direction, validate};

    #[test]
    fn down_stops_at_last_row() {
        let mut list = InventoryList::default();

        update_by_direction(&mut list, 3, &5, &CursorDirection::Down);
        assert_eq!(2, list.cursor);
    }

    #[test]
    fn up_stops_at_first_row() {
        let mut list = InventoryList {
            cursor: 1,
            ..Default::default()
        };

        update_by_direction(&mut list, 3, &4, &CursorDirection::Up);
        assert_eq!(0, list.cursor);
    }

    #[test]
    fn empty_view_resets_cursor() {
        let mut list = InventoryList {
            cursor: 2,
            ..Default::default()
        };

        update_by_direction(&mut list, 0, &1, &CursorDirection::Bottom);
        assert_eq!(0, list.cursor);
    }

    #[test]
    fn validate_clamps_to_shrunk_view() {
        let mut list = InventoryList {
            cursor: 7,
            ..Default::default()
        };

        validate(&mut list, 4);
        assert_eq!(3, list.cursor);
    }
}
