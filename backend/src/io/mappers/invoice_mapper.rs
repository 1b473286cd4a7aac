use crate::domain::commands::{AddInvoiceCommand, NewItemCommand};
use crate::domain::vat_calculator::parse_amount;
use shared::{InvoiceDto, InvoiceItemDto};

pub struct InvoiceMapper;

impl InvoiceMapper {
    pub fn to_command(dto: InvoiceDto) -> AddInvoiceCommand {
        AddInvoiceCommand {
            id: dto.id,
            number: dto.number,
            status: dto.status,
            order_date: dto.order_date,
            due_date: dto.due_date,
            sender_id: dto.sender_id,
            recipient_id: dto.recipient_id,
            items: dto.items.into_iter().map(Self::item_to_command).collect(),
        }
    }

    pub fn item_to_command(dto: InvoiceItemDto) -> NewItemCommand {
        NewItemCommand {
            description: dto.description,
            quantity: parse_amount(&dto.quantity),
            unit_price: parse_amount(&dto.unit_price),
            vat: dto.vat,
        }
    }
}
