pub mod deal_badge;
pub mod emi_table;
pub mod kpi_card;
pub mod price_chart;
pub mod toast;
