//! UI strings for the two supported languages

use crate::period::Period;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Russian,
    English,
}

pub struct Strings {
    pub title: &'static str,
    pub form_heading: &'static str,
    pub name: &'static str,
    pub name_hint: &'static str,
    pub usage_hours: &'static str,
    pub usage_hours_hint: &'static str,
    pub power: &'static str,
    pub power_hint: &'static str,
    pub price_per_kwh: &'static str,
    pub price_per_kwh_hint: &'static str,
    pub hours_error: &'static str,
    pub calculate: &'static str,
    pub add_appliance: &'static str,
    pub reset: &'static str,
    pub period: &'static str,
    pub consumption: &'static str,
    pub price: &'static str,
    pub appliance: &'static str,
    pub hours_suffix: &'static str,
    pub total: &'static str,
    pub total_consumption: &'static str,
    pub total_cost: &'static str,
    pub kwh: &'static str,
    pub currency: &'static str,
    pub enabled_tooltip: &'static str,
    pub delete_tooltip: &'static str,
    pub added_at: &'static str,
    pub empty_table: &'static str,
    pub stale_table: &'static str,
    periods: [&'static str; 5],
}

const RU: Strings = Strings {
    title: "Калькулятор потребления электроэнергии",
    form_heading: "ПРИБОР",
    name: "Название прибора",
    name_hint: "Например, чайник",
    usage_hours: "Время использования (часов в сутки)",
    usage_hours_hint: "0–24",
    power: "Мощность (Вт)",
    power_hint: "Например, 2000",
    price_per_kwh: "Цена за кВт*ч (РУБ)",
    price_per_kwh_hint: "Например, 5,5",
    hours_error: "Максимум 24 часа в сутки!",
    calculate: "Рассчитать",
    add_appliance: "Добавить прибор",
    reset: "Сбросить",
    period: "Период",
    consumption: "Потребление (кВт*ч)",
    price: "Цена (РУБ)",
    appliance: "Прибор",
    hours_suffix: "ч",
    total: "Общее значение",
    total_consumption: "Потребление",
    total_cost: "Стоимость",
    kwh: "кВт*ч",
    currency: "РУБ",
    enabled_tooltip: "Учитывать в расчёте",
    delete_tooltip: "Удалить прибор",
    added_at: "Добавлен",
    empty_table: "Добавьте прибор, чтобы увидеть расчёт",
    stale_table: "Нажмите «Рассчитать», чтобы обновить значения",
    periods: ["1 час", "1 день", "1 месяц", "1 год", "Пользовательское время"],
};

const EN: Strings = Strings {
    title: "Electricity Consumption Calculator",
    form_heading: "APPLIANCE",
    name: "Appliance name",
    name_hint: "e.g. Kettle",
    usage_hours: "Usage time (hours per day)",
    usage_hours_hint: "0–24",
    power: "Power (W)",
    power_hint: "e.g. 2000",
    price_per_kwh: "Price per kWh (RUB)",
    price_per_kwh_hint: "e.g. 5.5",
    hours_error: "Maximum 24 hours per day!",
    calculate: "Calculate",
    add_appliance: "Add Appliance",
    reset: "Reset",
    period: "Period",
    consumption: "Consumption (kWh)",
    price: "Price (RUB)",
    appliance: "Appliance",
    hours_suffix: "h",
    total: "Total",
    total_consumption: "Consumption",
    total_cost: "Cost",
    kwh: "kWh",
    currency: "RUB",
    enabled_tooltip: "Include in calculation",
    delete_tooltip: "Remove appliance",
    added_at: "Added",
    empty_table: "Add an appliance to see the calculation",
    stale_table: "Press Calculate to refresh the figures",
    periods: ["1 hour", "1 day", "1 month", "1 year", "Custom time"],
};

impl Language {
    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Russian => &RU,
            Language::English => &EN,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "RU",
            Language::English => "EN",
        }
    }
}

impl Strings {
    pub fn period_label(&self, period: Period) -> &'static str {
        let idx = match period {
            Period::Hour => 0,
            Period::Day => 1,
            Period::Month => 2,
            Period::Year => 3,
            Period::Custom => 4,
        };
        self.periods[idx]
    }

    /// Column caption, e.g. `Прибор "Чайник" (0.5 ч)`
    pub fn appliance_label(&self, name: &str, usage_hours: &str) -> String {
        format!(
            "{} \"{}\" ({} {})",
            self.appliance, name, usage_hours, self.hours_suffix
        )
    }

    pub fn total_consumption_line(&self, consumption: &str) -> String {
        format!("{}: {} {}", self.total_consumption, consumption, self.kwh)
    }

    pub fn total_cost_line(&self, cost: &str) -> String {
        format!("{}: {} {}", self.total_cost, cost, self.currency)
    }
}
