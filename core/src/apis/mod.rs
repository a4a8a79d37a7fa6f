//! Resource families. Each handle borrows the client and maps named
//! operations onto HTTP calls; obtain one through the matching accessor on
//! [`AsaasClient`], e.g. `client.payments().get("pay_123")`.

pub mod account;
pub mod anticipations;
pub mod chargebacks;
pub mod checkout;
pub mod credit_bureau;
pub mod credit_card;
pub mod customers;
pub mod installments;
pub mod invoices;
pub mod negative_list;
pub mod notifications;
pub mod payment_links;
pub mod payments;
pub mod pix;
pub mod refunds;
pub mod split;
pub mod subaccounts;
pub mod subscriptions;
pub mod transfers;
pub mod webhooks;

use crate::client::AsaasClient;

impl AsaasClient {
    pub fn account(&self) -> account::AccountApi<'_> {
        account::AccountApi { client: self }
    }

    pub fn anticipations(&self) -> anticipations::AnticipationsApi<'_> {
        anticipations::AnticipationsApi { client: self }
    }

    pub fn chargebacks(&self) -> chargebacks::ChargebacksApi<'_> {
        chargebacks::ChargebacksApi { client: self }
    }

    pub fn checkout(&self) -> checkout::CheckoutApi<'_> {
        checkout::CheckoutApi { client: self }
    }

    pub fn credit_bureau(&self) -> credit_bureau::CreditBureauApi<'_> {
        credit_bureau::CreditBureauApi { client: self }
    }

    pub fn credit_card(&self) -> credit_card::CreditCardApi<'_> {
        credit_card::CreditCardApi { client: self }
    }

    pub fn customers(&self) -> customers::CustomersApi<'_> {
        customers::CustomersApi { client: self }
    }

    pub fn installments(&self) -> installments::InstallmentsApi<'_> {
        installments::InstallmentsApi { client: self }
    }

    pub fn invoices(&self) -> invoices::InvoicesApi<'_> {
        invoices::InvoicesApi { client: self }
    }

    pub fn negative_list(&self) -> negative_list::NegativeListApi<'_> {
        negative_list::NegativeListApi { client: self }
    }

    pub fn notifications(&self) -> notifications::NotificationsApi<'_> {
        notifications::NotificationsApi { client: self }
    }

    pub fn payment_links(&self) -> payment_links::PaymentLinksApi<'_> {
        payment_links::PaymentLinksApi { client: self }
    }

    pub fn payments(&self) -> payments::PaymentsApi<'_> {
        payments::PaymentsApi { client: self }
    }

    pub fn pix(&self) -> pix::PixApi<'_> {
        pix::PixApi { client: self }
    }

    pub fn refunds(&self) -> refunds::RefundsApi<'_> {
        refunds::RefundsApi { client: self }
    }

    pub fn split(&self) -> split::SplitApi<'_> {
        split::SplitApi { client: self }
    }

    pub fn subaccounts(&self) -> subaccounts::SubaccountsApi<'_> {
        subaccounts::SubaccountsApi { client: self }
    }

    pub fn subscriptions(&self) -> subscriptions::SubscriptionsApi<'_> {
        subscriptions::SubscriptionsApi { client: self }
    }

    pub fn transfers(&self) -> transfers::TransfersApi<'_> {
        transfers::TransfersApi { client: self }
    }

    pub fn webhooks(&self) -> webhooks::WebhooksApi<'_> {
        webhooks::WebhooksApi { client: self }
    }
}
