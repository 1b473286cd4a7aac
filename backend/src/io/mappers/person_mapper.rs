use crate::domain::models::{Recipient, Sender};
use shared::{RecipientDto, SenderDto};

pub struct PersonMapper;

impl PersonMapper {
    pub fn sender_to_domain(dto: SenderDto) -> Sender {
        Sender {
            id: dto.id,
            name: dto.name,
            address: dto.address,
            bank_name: dto.bank_name,
            account_number: dto.account_number,
        }
    }

    pub fn sender_to_dto(domain: &Sender) -> SenderDto {
        SenderDto {
            id: domain.id.clone(),
            name: domain.name.clone(),
            address: domain.address.clone(),
            bank_name: domain.bank_name.clone(),
            account_number: domain.account_number.clone(),
        }
    }

    pub fn recipient_to_domain(dto: RecipientDto) -> Recipient {
        Recipient {
            id: dto.id,
            name: dto.name,
            address: dto.address,
        }
    }

    pub fn recipient_to_dto(domain: &Recipient) -> RecipientDto {
        RecipientDto {
            id: domain.id.clone(),
            name: domain.name.clone(),
            address: domain.address.clone(),
        }
    }
}
